use std::path::Path;

use thiserror::Error;

/// Failures of the file-backed document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("malformed document: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("stored document changed since it was read")]
    PreconditionFailed,
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::NotFound(path.display().to_string());
        }
        Self::Io { path: path.display().to_string(), source }
    }
}

/// Failures surfaced by the content service to its callers.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content write failed: {0}")]
    Write(#[source] StoreError),
    #[error("content version conflict")]
    VersionConflict,
}

impl From<StoreError> for ContentError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::PreconditionFailed => ContentError::VersionConflict,
            other => ContentError::Write(other),
        }
    }
}
