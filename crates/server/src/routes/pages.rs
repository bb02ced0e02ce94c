// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use models::LandingView;
use serde::Deserialize;

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct LandingTemplate<'a> {
    pub view: &'a LandingView,
    pub scheduler_url: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct LandingQuery {
    /// Selected testimonial; non-numeric values are ignored.
    pub testimonial: Option<String>,
}

impl LandingQuery {
    fn testimonial_index(&self) -> usize {
        self.testimonial
            .as_deref()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(0)
    }
}

/// Render the landing page from one content read.
pub async fn landing(
    State(state): State<AppState>,
    Query(query): Query<LandingQuery>,
) -> Result<Html<String>, ApiError> {
    let loaded = state.content.load().await;
    let view = LandingView::build(loaded.document(), query.testimonial_index());
    render_landing(&view, &state.site.scheduler_url).map(Html)
}

pub fn render_landing(view: &LandingView, scheduler_url: &str) -> Result<String, ApiError> {
    LandingTemplate { view, scheduler_url }
        .render()
        .map_err(|e| ApiError::Render(e.to_string()))
}
