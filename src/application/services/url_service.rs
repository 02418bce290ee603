//! Registry operations over the URL repository.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::{NewUrl, UrlRecord, UrlUpdate};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Service implementing the registry operations: list, get, create,
/// update, and soft delete.
///
/// The service owns id generation and timestamp assignment. Store failures
/// are logged here and replaced by the per-operation message reported to
/// the client.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
}

impl UrlService {
    /// Creates a new service over the given repository.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Probes store connectivity for the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns the untranslated repository error so the caller can report
    /// its detail.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Lists all non-deleted records, ordered by name ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] (`"Failed to fetch URLs"`) when the
    /// store is unreachable.
    pub async fn list_urls(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.repository
            .list_active()
            .await
            .map_err(|e| store_error(e, "Failed to fetch URLs"))
    }

    /// Fetches one non-deleted record by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] (`"URL not found"`) when the id is
    /// unknown or the record is soft-deleted, [`AppError::Store`]
    /// (`"Failed to fetch URL"`) on store failure.
    pub async fn get_url(&self, id: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_active_by_id(id)
            .await
            .map_err(|e| store_error(e, "Failed to fetch URL"))?
            .ok_or_else(|| AppError::not_found("URL not found"))
    }

    /// Creates a record from validated input.
    ///
    /// Assigns a fresh UUID v4 id and one `now` used for both timestamps,
    /// so `created_at == updated_at` on the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] (`"Failed to create URL"`) on store
    /// failure.
    pub async fn create_url(&self, input: NewUrl) -> Result<UrlRecord, AppError> {
        let record = UrlRecord::create(Uuid::new_v4().to_string(), input, Utc::now());

        self.repository
            .insert(record)
            .await
            .map_err(|e| store_error(e, "Failed to create URL"))
    }

    /// Overwrites a non-deleted record with validated input and refreshes
    /// `updated_at`.
    ///
    /// The repository statement is conditional on `is_deleted = FALSE`, so
    /// a record soft-deleted by a concurrent request simply stops
    /// matching; there is no separate read to race against.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] (`"URL not found"`) when no active
    /// record matches, [`AppError::Store`] (`"Failed to update URL"`) on
    /// store failure.
    pub async fn update_url(&self, id: &str, input: NewUrl) -> Result<UrlRecord, AppError> {
        let update = UrlUpdate::new(input, Utc::now());

        self.repository
            .update_active(id, update)
            .await
            .map_err(|e| store_error(e, "Failed to update URL"))?
            .ok_or_else(|| AppError::not_found("URL not found"))
    }

    /// Soft-deletes a record, setting `is_deleted` and `deleted_at`
    /// together.
    ///
    /// Deleting an already-deleted record succeeds again (the statement is
    /// unconditional on the flag); only a completely unknown id reports
    /// not-found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] (`"URL not found"`) when the id does
    /// not exist, [`AppError::Store`] (`"Failed to delete URL"`) on store
    /// failure.
    pub async fn delete_url(&self, id: &str) -> Result<(), AppError> {
        let deleted = self
            .repository
            .soft_delete(id, Utc::now())
            .await
            .map_err(|e| store_error(e, "Failed to delete URL"))?;

        if deleted {
            Ok(())
        } else {
            Err(AppError::not_found("URL not found"))
        }
    }
}

/// Logs a store failure and replaces it with the generic per-operation
/// message. Non-database errors pass through untouched.
fn store_error(e: AppError, message: &str) -> AppError {
    match e {
        AppError::Database(e) => {
            tracing::error!(error = %e, "store operation failed");
            AppError::store(message)
        }
        other => other,
    }
}
