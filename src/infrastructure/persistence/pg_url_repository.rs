//! PostgreSQL implementation of the URL repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;

use crate::domain::entities::{UrlRecord, UrlUpdate};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Row shape shared by every statement that returns a full record.
#[derive(sqlx::FromRow)]
struct UrlRow {
    id: String,
    name: String,
    main_url: String,
    sub_urls: Json<HashMap<String, String>>,
    is_deleted: bool,
    deleted_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            main_url: row.main_url,
            sub_urls: row.sub_urls.0,
            is_deleted: row.is_deleted,
            deleted_at: row.deleted_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL repository for URL record storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection. Soft-delete
/// visibility is enforced in the statements themselves: reads filter on
/// `is_deleted = FALSE` and the update is conditional on it, so no
/// operation needs a separate existence check.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_one(self.pool.as_ref()).await?;
        Ok(())
    }

    async fn insert(&self, record: UrlRecord) -> Result<UrlRecord, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (id, name, main_url, sub_urls, is_deleted, deleted_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, main_url, sub_urls, is_deleted, deleted_at, created_at, updated_at
            "#,
        )
        .bind(&record.id)
        .bind(&record.name)
        .bind(&record.main_url)
        .bind(Json(&record.sub_urls))
        .bind(record.is_deleted)
        .bind(record.deleted_at)
        .bind(record.created_at)
        .bind(record.updated_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_active(&self) -> Result<Vec<UrlRecord>, AppError> {
        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, name, main_url, sub_urls, is_deleted, deleted_at, created_at, updated_at
            FROM urls
            WHERE is_deleted = FALSE
            ORDER BY name ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }

    async fn find_active_by_id(&self, id: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, name, main_url, sub_urls, is_deleted, deleted_at, created_at, updated_at
            FROM urls
            WHERE id = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn update_active(
        &self,
        id: &str,
        update: UrlUpdate,
    ) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            UPDATE urls
            SET name = $2, main_url = $3, sub_urls = $4, updated_at = $5
            WHERE id = $1 AND is_deleted = FALSE
            RETURNING id, name, main_url, sub_urls, is_deleted, deleted_at, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.main_url)
        .bind(Json(&update.sub_urls))
        .bind(update.updated_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn soft_delete(&self, id: &str, deleted_at: DateTime<Utc>) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE urls
            SET is_deleted = TRUE, deleted_at = $2
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(deleted_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
