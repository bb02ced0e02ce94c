use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

use configs::AppConfig;
use service::{runtime, ContentService};

use crate::routes;
use crate::state::{AppState, SiteSettings};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Open the content store and assemble the router for `cfg`.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    runtime::ensure_env(&cfg.content.static_dir, &cfg.content.data_dir).await?;

    let content_path = cfg.content.content_path();
    let content = ContentService::open(&content_path).await?;
    info!(path = %content_path.display(), auth = cfg.content.admin_token.is_some(), "content store ready");

    let state = AppState::new(content, SiteSettings::from(&cfg.content));
    Ok(routes::build_router(state, &cfg.content.static_dir, build_cors()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting site server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

/// Router over any content store, with the default CORS policy.
pub fn app_with_store(content: Arc<dyn service::ContentStore>, site: SiteSettings, static_dir: &str) -> Router {
    routes::build_router(AppState::new(content, site), static_dir, build_cors())
}
