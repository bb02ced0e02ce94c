use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("malformed content document: {0}")]
    Malformed(#[from] serde_json::Error),
}
