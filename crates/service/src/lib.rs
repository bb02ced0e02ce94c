//! Service layer for the site content.
//! - `storage`: file-backed single-document JSON store.
//! - `content`: load-or-fallback and whole-document save with version stamps.
//! - `runtime`: startup environment checks.

pub mod errors;
pub mod runtime;
pub mod storage;
pub mod content;
#[cfg(test)]
pub mod test_support;

pub use content::{ContentLoad, ContentService, ContentStore, Version};
pub use errors::{ContentError, StoreError};
