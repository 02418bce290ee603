//! Registered URL entity with soft-delete metadata.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// A registered URL: a display name, a main URL, and labeled sub-URLs.
///
/// Records are never physically removed. Deletion sets `is_deleted` and
/// `deleted_at` together, and every read path filters deleted records out.
#[derive(Debug, Clone)]
pub struct UrlRecord {
    pub id: String,
    pub name: String,
    pub main_url: String,
    pub sub_urls: HashMap<String, String>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates an active record with both timestamps set to `now`.
    pub fn create(id: String, input: NewUrl, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            main_url: input.main_url,
            sub_urls: input.sub_urls,
            is_deleted: false,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Validated input for creating a record (and for the full overwrite an
/// update performs).
#[derive(Debug, Clone)]
pub struct NewUrl {
    pub name: String,
    pub main_url: String,
    pub sub_urls: HashMap<String, String>,
}

/// Field values written by an update statement.
///
/// Updates overwrite `name`, `main_url`, and `sub_urls` wholesale and
/// refresh `updated_at`; no other column is touched.
#[derive(Debug, Clone)]
pub struct UrlUpdate {
    pub name: String,
    pub main_url: String,
    pub sub_urls: HashMap<String, String>,
    pub updated_at: DateTime<Utc>,
}

impl UrlUpdate {
    /// Pairs the overwrite input with its `updated_at` timestamp.
    pub fn new(input: NewUrl, updated_at: DateTime<Utc>) -> Self {
        Self {
            name: input.name,
            main_url: input.main_url,
            sub_urls: input.sub_urls,
            updated_at,
        }
    }
}
