use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use common::types::MessageBody;
use models::ContentDocument;
use service::{ContentLoad, Version};
use tracing::{info, warn};

use crate::errors::ApiError;
use crate::routes::auth::require_admin_token;
use crate::state::AppState;

/// Set on `GET /api/get-content` responses served from defaults.
pub const FALLBACK_HEADER: &str = "x-content-fallback";

/// Return the stored document, or the empty structure when nothing usable is stored.
#[utoipa::path(get, path = "/api/get-content", tag = "content", responses((status = 200, description = "Stored content, or the empty structure with X-Content-Fallback: true", body = crate::openapi::ContentDocumentDoc)))]
pub async fn get_content(State(state): State<AppState>) -> Response {
    match state.content.load().await {
        ContentLoad::Loaded { raw, version, .. } => {
            let mut res = Json(raw).into_response();
            if let Ok(tag) = HeaderValue::from_str(&version.to_etag()) {
                res.headers_mut().insert(header::ETAG, tag);
            }
            res
        }
        ContentLoad::Fallback => (
            [(FALLBACK_HEADER, "true")],
            Json(ContentDocument::default()),
        )
            .into_response(),
    }
}

/// Overwrite the whole content document with the request body.
///
/// An `If-Match` header turns the save into a compare-and-swap against the
/// stored version; without it the last writer wins.
#[utoipa::path(post, path = "/api/save-content", tag = "content", request_body = crate::openapi::ContentDocumentDoc, responses((status = 200, description = "Saved", body = crate::openapi::MessageDoc), (status = 401, description = "Admin token missing or wrong"), (status = 405, description = "Only POST is allowed"), (status = 412, description = "If-Match did not match the stored version"), (status = 500, description = "Write failed", body = crate::openapi::MessageDoc)))]
pub async fn save_content(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(document): Json<serde_json::Value>,
) -> Result<Response, ApiError> {
    if let Err(e) = require_admin_token(state.site.admin_token.as_deref(), &headers) {
        common::metrics::record_save("unauthorized");
        warn!(event = "save_unauthorized", "save-content rejected: bad admin token");
        return Err(e);
    }

    let expected = match headers.get(header::IF_MATCH) {
        None => None,
        Some(raw) => {
            // an unparsable tag can never match the stored version
            let parsed = raw.to_str().ok().and_then(Version::from_etag);
            match parsed {
                Some(v) => Some(v),
                None => return Err(ApiError::VersionConflict),
            }
        }
    };

    let version = state.content.save_value(&document, expected.as_ref()).await?;
    info!(event = "save_content", %version, "content saved");

    let mut res = (StatusCode::OK, Json(MessageBody::new("Content saved successfully"))).into_response();
    if let Ok(tag) = HeaderValue::from_str(&version.to_etag()) {
        res.headers_mut().insert(header::ETAG, tag);
    }
    Ok(res)
}

/// Any method other than POST on the save endpoint.
pub async fn save_method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method)
}
