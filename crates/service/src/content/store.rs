use async_trait::async_trait;

use crate::content::{service::ContentLoad, version::Version};
use crate::errors::ContentError;

/// Trait abstraction for the site content document.
/// Implementations can be file-backed or in-memory for tests.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Read the document; any read failure collapses to `ContentLoad::Fallback`.
    async fn load(&self) -> ContentLoad;

    /// Replace the whole document with `document` as given.
    /// With `expected`, the write only happens if the stored version still matches.
    async fn save_value(
        &self,
        document: &serde_json::Value,
        expected: Option<&Version>,
    ) -> Result<Version, ContentError>;
}
