//! Content persistence: load the site document (or fall back) and replace it.

pub mod version;
pub mod store;
pub mod service;

pub use service::{ContentLoad, ContentService};
pub use store::ContentStore;
pub use version::Version;
