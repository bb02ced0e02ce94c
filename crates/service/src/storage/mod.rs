//! Storage abstractions for service layer
//!
//! Contains the file-backed JSON document store used by the content service.

pub mod json_doc_store;
