use std::sync::Arc;

use service::ContentStore;

/// Site-wide settings resolved from config at startup.
#[derive(Clone, Debug)]
pub struct SiteSettings {
    /// Token required by the save endpoint; `None` leaves it open.
    pub admin_token: Option<String>,
    pub scheduler_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self { admin_token: None, scheduler_url: configs::DEFAULT_SCHEDULER_URL.to_string() }
    }
}

impl From<&configs::ContentConfig> for SiteSettings {
    fn from(cfg: &configs::ContentConfig) -> Self {
        Self { admin_token: cfg.admin_token.clone(), scheduler_url: cfg.scheduler_url.clone() }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentStore>,
    pub site: Arc<SiteSettings>,
}

impl AppState {
    pub fn new(content: Arc<dyn ContentStore>, site: SiteSettings) -> Self {
        Self { content, site: Arc::new(site) }
    }
}
