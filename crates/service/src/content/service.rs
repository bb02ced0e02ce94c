use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use models::ContentDocument;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use crate::content::{store::ContentStore, version::Version};
use crate::errors::{ContentError, StoreError};
use crate::storage::json_doc_store::JsonDocStore;

/// Outcome of reading the content store.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentLoad {
    /// The stored document, its raw JSON exactly as saved, and its version.
    Loaded { document: ContentDocument, raw: serde_json::Value, version: Version },
    /// Nothing usable on disk (missing, unreadable or not JSON); render defaults.
    Fallback,
}

impl ContentLoad {
    pub fn document(&self) -> Option<&ContentDocument> {
        match self {
            ContentLoad::Loaded { document, .. } => Some(document),
            ContentLoad::Fallback => None,
        }
    }

    pub fn version(&self) -> Option<&Version> {
        match self {
            ContentLoad::Loaded { version, .. } => Some(version),
            ContentLoad::Fallback => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ContentLoad::Fallback)
    }

    pub fn into_document_or_default(self) -> ContentDocument {
        match self {
            ContentLoad::Loaded { document, .. } => document,
            ContentLoad::Fallback => ContentDocument::default(),
        }
    }
}

/// Load/save of the site content document backed by one JSON file.
pub struct ContentService {
    store: Arc<JsonDocStore>,
}

impl ContentService {
    /// Open the service on `path`; the file is created by the first save.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, StoreError> {
        let store = JsonDocStore::new(path).await?;
        Ok(Arc::new(Self { store }))
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Read the document. Missing files and files that do not parse as JSON
    /// become `Fallback`; any JSON that parses is `Loaded`.
    #[instrument(skip(self), fields(path = %self.store.path().display()))]
    pub async fn load(&self) -> ContentLoad {
        match self.read().await {
            Ok(loaded) => {
                common::metrics::record_load("loaded");
                debug!(event = "content_loaded", "content document read");
                loaded
            }
            Err(e) => {
                common::metrics::record_load("fallback");
                warn!(event = "content_fallback", error = %e, "content unavailable; using defaults");
                ContentLoad::Fallback
            }
        }
    }

    pub async fn load_or_default(&self) -> ContentDocument {
        self.load().await.into_document_or_default()
    }

    async fn read(&self) -> Result<ContentLoad, StoreError> {
        let bytes = self.store.read_bytes().await?;
        let raw: serde_json::Value = serde_json::from_slice(&bytes).map_err(StoreError::Malformed)?;
        // section-level oddities are absorbed by the model; only a non-object top level lands here
        let document = ContentDocument::deserialize(&raw).unwrap_or_else(|e| {
            debug!(event = "content_untyped", error = %e, "stored JSON is not a content object; rendering defaults");
            ContentDocument::default()
        });
        Ok(ContentLoad::Loaded { document, raw, version: Version::of_bytes(&bytes) })
    }

    /// Replace the stored document with `document`, written as-is.
    ///
    /// Without `expected` the last writer wins. With `expected` the save fails
    /// with `VersionConflict` unless the stored bytes still hash to it.
    #[instrument(skip(self, document, expected), fields(path = %self.store.path().display()))]
    pub async fn save<T>(&self, document: &T, expected: Option<&Version>) -> Result<Version, ContentError>
    where
        T: Serialize + Sync + ?Sized,
    {
        let result = match expected {
            None => self.store.save(document).await,
            Some(want) => {
                self.store
                    .save_if(document, |current| {
                        current.map(Version::of_bytes).as_ref() == Some(want)
                    })
                    .await
            }
        };

        match result {
            Ok(bytes) => {
                let version = Version::of_bytes(&bytes);
                common::metrics::record_save("ok");
                info!(event = "content_saved", %version, bytes = bytes.len(), "content document replaced");
                Ok(version)
            }
            Err(StoreError::PreconditionFailed) => {
                common::metrics::record_save("conflict");
                warn!(event = "content_conflict", "save rejected; stored version changed");
                Err(ContentError::VersionConflict)
            }
            Err(e) => {
                common::metrics::record_save("error");
                error!(event = "content_save_failed", error = %e, "error saving content");
                Err(ContentError::Write(e))
            }
        }
    }
}

#[async_trait]
impl ContentStore for ContentService {
    async fn load(&self) -> ContentLoad {
        ContentService::load(self).await
    }

    async fn save_value(
        &self,
        document: &serde_json::Value,
        expected: Option<&Version>,
    ) -> Result<Version, ContentError> {
        self.save(document, expected).await
    }
}
