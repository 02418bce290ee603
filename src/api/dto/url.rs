//! DTOs for the URL registry endpoints.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::error::AppError;

/// Request body shared by the create and update endpoints.
///
/// The required fields are deserialized as options so an absent field
/// reports the same validation message as an empty one instead of a
/// deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlPayload {
    pub name: Option<String>,
    pub main_url: Option<String>,
    pub sub_urls: Option<HashMap<String, String>>,
}

impl UrlPayload {
    /// Validates the payload into domain input.
    ///
    /// `subUrls` is optional and defaults to an empty map.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] (`"Name and mainUrl are required"`)
    /// when `name` or `mainUrl` is missing or empty.
    pub fn into_new_url(self) -> Result<NewUrl, AppError> {
        match (self.name, self.main_url) {
            (Some(name), Some(main_url)) if !name.is_empty() && !main_url.is_empty() => Ok(NewUrl {
                name,
                main_url,
                sub_urls: self.sub_urls.unwrap_or_default(),
            }),
            _ => Err(AppError::validation("Name and mainUrl are required")),
        }
    }
}

/// A stored record as returned by the API.
///
/// `deletedAt` is always present, serialized as `null` until the record
/// is soft-deleted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlResponse {
    pub id: String,
    pub name: String,
    pub main_url: String,
    pub sub_urls: HashMap<String, String>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UrlRecord> for UrlResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            main_url: record.main_url,
            sub_urls: record.sub_urls,
            is_deleted: record.is_deleted,
            deleted_at: record.deleted_at,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
