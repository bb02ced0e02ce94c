use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use server::{startup::app_with_store, SiteSettings};
use service::ContentService;
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
    _dir: tempfile::TempDir,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let dir = tempfile::tempdir()?;
    let content = ContentService::open(dir.path().join("data").join("content.json")).await?;
    let static_dir = dir.path().join("public");
    std::fs::create_dir_all(&static_dir)?;
    std::fs::write(static_dir.join("placeholder.svg"), "<svg xmlns=\"http://www.w3.org/2000/svg\"/>")?;

    let app = app_with_store(content, SiteSettings::default(), &static_dir.to_string_lossy());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, _dir: dir })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_save_and_read_back_over_http() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let doc = json!({
        "images": {},
        "testimonials": [],
        "experiences": [{"icon": "Scale", "title": "Disputes", "description": "Arbitration"}],
        "content": {"lawyerName": "Sam"}
    });

    let res = c.post(format!("{}/api/save-content", app.base_url)).json(&doc).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(format!("{}/api/get-content", app.base_url)).send().await?;
    assert_eq!(res.json::<serde_json::Value>().await?, doc);

    let res = c.get(format!("{}/api/save-content", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.headers().get("allow").map(|v| v.to_str().unwrap_or_default()), Some("POST"));
    Ok(())
}

#[tokio::test]
async fn e2e_static_assets_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/placeholder.svg", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = reqwest::get(format!("{}/missing.png", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}
