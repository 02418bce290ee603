//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence or transport
//! concerns. The registry has a single entity:
//!
//! - [`UrlRecord`] - A registered URL with soft-delete metadata
//!
//! Companion types follow the "New Type" pattern used for creation and
//! mutation inputs: [`NewUrl`] carries validated create/overwrite input,
//! [`UrlUpdate`] carries the fields an update statement writes.

pub mod url;

pub use url::{NewUrl, UrlRecord, UrlUpdate};
