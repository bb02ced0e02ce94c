use axum::http::HeaderMap;

use crate::errors::ApiError;

pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Check the save endpoint's admin token.
///
/// Accepts `X-Admin-Token: <token>` or `Authorization: Bearer <token>`.
/// With no token configured every caller is allowed.
pub fn require_admin_token(expected: Option<&str>, headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(expected) = expected else {
        return Ok(());
    };

    let key_from_header = headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().to_string());

    let key = if let Some(k) = key_from_header {
        Some(k)
    } else {
        // fallback to bearer auth
        headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(|s| s.trim().to_string())
    };

    match key {
        Some(k) if !k.is_empty() && constant_time_eq(k.as_bytes(), expected.as_bytes()) => Ok(()),
        _ => Err(ApiError::Unauthorized),
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
