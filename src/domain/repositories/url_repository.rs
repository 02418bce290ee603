//! Repository trait for registered URL data access.

use crate::domain::entities::{UrlRecord, UrlUpdate};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for the `urls` store.
///
/// Every operation is a single statement against one table; update and
/// delete carry their soft-delete condition inside the statement, so no
/// caller needs a separate existence check.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Trivial connectivity probe (`SELECT 1` on SQL stores).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] when the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;

    /// Persists a fully-populated record and returns the stored row.
    ///
    /// The caller assigns the id and timestamps; the repository writes them
    /// verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn insert(&self, record: UrlRecord) -> Result<UrlRecord, AppError>;

    /// All records with `is_deleted = FALSE`, ordered by name ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn list_active(&self) -> Result<Vec<UrlRecord>, AppError>;

    /// Finds one non-deleted record by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if an active record matches
    /// - `Ok(None)` if the id is unknown or the record is soft-deleted
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_active_by_id(&self, id: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Overwrites `name`, `main_url`, and `sub_urls` and refreshes
    /// `updated_at` in one conditional statement.
    ///
    /// The statement matches only non-deleted rows, so a soft-deleted
    /// record can never be resurrected here. `Ok(None)` means nothing
    /// matched and nothing was written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn update_active(
        &self,
        id: &str,
        update: UrlUpdate,
    ) -> Result<Option<UrlRecord>, AppError>;

    /// Marks a record deleted, setting `is_deleted` and `deleted_at`
    /// together regardless of the record's current soft-delete state.
    ///
    /// Returns `Ok(true)` when a row matched (repeat deletes refresh
    /// `deleted_at` and still report `true`), `Ok(false)` when the id does
    /// not exist at all.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn soft_delete(&self, id: &str, deleted_at: DateTime<Utc>) -> Result<bool, AppError>;
}
