use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::MessageBody;
use service::ContentError;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("error saving content")]
    SaveFailed,
    #[error("content was modified since it was read")]
    VersionConflict,
    #[error("unauthorized")]
    Unauthorized,
    #[error("method {0} not allowed")]
    MethodNotAllowed(Method),
    #[error("render error: {0}")]
    Render(String),
}

impl From<ContentError> for ApiError {
    fn from(e: ContentError) -> Self {
        match e {
            ContentError::VersionConflict => ApiError::VersionConflict,
            ContentError::Write(_) => ApiError::SaveFailed,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::SaveFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(MessageBody::new("Error saving content"))).into_response()
            }
            ApiError::VersionConflict => (
                StatusCode::PRECONDITION_FAILED,
                Json(MessageBody::new("Content was modified by another save")),
            )
                .into_response(),
            ApiError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, Json(MessageBody::new("Unauthorized"))).into_response()
            }
            ApiError::MethodNotAllowed(method) => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, "POST")],
                format!("Method {method} Not Allowed"),
            )
                .into_response(),
            ApiError::Render(msg) => {
                error!(error = %msg, "page render failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
