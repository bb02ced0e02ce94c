use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

/// Booking link embedded in the appointment section.
pub const DEFAULT_SCHEDULER_URL: &str = "https://calendly.com/carlie4carliejeff50/30min";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

/// Where the content document and static assets live, and who may write it.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// When set, `POST /api/save-content` requires a matching `X-Admin-Token`.
    #[serde(default)]
    pub admin_token: Option<String>,
    #[serde(default = "default_scheduler_url")]
    pub scheduler_url: String,
}

fn default_data_dir() -> String { "data".into() }
fn default_file_name() -> String { "content.json".into() }
fn default_static_dir() -> String { "public".into() }
fn default_scheduler_url() -> String { DEFAULT_SCHEDULER_URL.into() }

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            file_name: default_file_name(),
            static_dir: default_static_dir(),
            admin_token: None,
            scheduler_url: default_scheduler_url(),
        }
    }
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`), falling back to defaults when the
    /// file is absent, then apply env overrides and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) => match e.downcast_ref::<std::io::Error>() {
                Some(io) if io.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
                _ => return Err(e),
            },
        };
        cfg.apply_env(|k| std::env::var(k).ok());
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Overlay environment variables; `lookup` is injected so tests stay hermetic.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT").and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(w) = lookup("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok()) {
            self.server.worker_threads = Some(w);
        }
        if let Some(dir) = lookup("CONTENT_DATA_DIR") {
            self.content.data_dir = dir;
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            self.content.static_dir = dir;
        }
        if let Some(token) = lookup("ADMIN_TOKEN") {
            self.content.admin_token = Some(token);
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.content.normalize()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        Ok(())
    }
}

impl ContentConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.data_dir.trim().is_empty() {
            return Err(anyhow!("content.data_dir must not be empty"));
        }
        let name = self.file_name.trim();
        if name.is_empty() {
            return Err(anyhow!("content.file_name must not be empty"));
        }
        if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
            return Err(anyhow!("content.file_name must be a bare file name"));
        }
        self.file_name = name.to_string();
        // blank token means "no auth", same as leaving it out
        if self.admin_token.as_deref().is_some_and(|t| t.trim().is_empty()) {
            self.admin_token = None;
        }
        if self.static_dir.trim().is_empty() {
            self.static_dir = default_static_dir();
        }
        Ok(())
    }

    /// Full path of the content document, `<data_dir>/<file_name>`.
    pub fn content_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_point_at_data_content_json() {
        let mut cfg = AppConfig::default();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.content.content_path(), PathBuf::from("data").join("content.json"));
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.content.admin_token.is_none());
    }

    #[test]
    fn server_section_with_only_port_keeps_default_host() {
        let cfg = parse("[server]\nport = 3000\n").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn parses_partial_toml() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 3000

            [content]
            data_dir = "/srv/site"
            admin_token = "s3cret"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.content.data_dir, "/srv/site");
        assert_eq!(cfg.content.file_name, "content.json");
        assert_eq!(cfg.content.admin_token.as_deref(), Some("s3cret"));
        assert_eq!(cfg.content.scheduler_url, DEFAULT_SCHEDULER_URL);
    }

    #[test]
    fn env_overrides_file_values() {
        let env: HashMap<&str, &str> = [
            ("SERVER_PORT", "9090"),
            ("CONTENT_DATA_DIR", "/tmp/content"),
            ("ADMIN_TOKEN", "abc"),
        ]
        .into_iter()
        .collect();
        let mut cfg = AppConfig::default();
        cfg.apply_env(|k| env.get(k).map(|v| v.to_string()));
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.content.data_dir, "/tmp/content");
        assert_eq!(cfg.content.admin_token.as_deref(), Some("abc"));
    }

    #[test]
    fn rejects_bad_values() {
        let mut cfg = AppConfig::default();
        cfg.server.port = 0;
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.content.file_name = "../escape.json".into();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn blank_admin_token_disables_auth() {
        let mut cfg = AppConfig::default();
        cfg.content.admin_token = Some("   ".into());
        cfg.normalize_and_validate().unwrap();
        assert!(cfg.content.admin_token.is_none());
    }

    #[test]
    fn load_from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nhost = \"localhost\"\nport = 8181\n").unwrap();
        let cfg = load_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 8181);
        assert_eq!(cfg.content.data_dir, "data");
    }
}
