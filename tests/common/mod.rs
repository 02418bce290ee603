#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use url_registry::application::services::UrlService;
use url_registry::domain::entities::{UrlRecord, UrlUpdate};
use url_registry::domain::repositories::UrlRepository;
use url_registry::error::AppError;
use url_registry::routes::app_router;
use url_registry::state::AppState;

/// In-memory repository used to drive handlers without PostgreSQL.
///
/// Mirrors the store semantics the service relies on: reads hide
/// soft-deleted rows, update only matches active rows, delete flags the
/// row unconditionally. When constructed with [`unreachable`], every
/// operation fails like a closed connection pool.
///
/// [`unreachable`]: InMemoryUrlRepository::unreachable
pub struct InMemoryUrlRepository {
    records: Mutex<HashMap<String, UrlRecord>>,
    fail: bool,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            fail: false,
        }
    }

    /// Repository whose every operation fails with a pool error.
    pub fn unreachable() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            fail: true,
        }
    }

    /// Raw stored record, soft-deleted or not.
    pub fn record(&self, id: &str) -> Option<UrlRecord> {
        self.records.lock().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.fail {
            Err(AppError::Database(sqlx::Error::PoolClosed))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }

    async fn insert(&self, record: UrlRecord) -> Result<UrlRecord, AppError> {
        self.check()?;
        self.records
            .lock()
            .unwrap()
            .insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn list_active(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.check()?;
        let mut records: Vec<UrlRecord> = self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|r| !r.is_deleted)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(records)
    }

    async fn find_active_by_id(&self, id: &str) -> Result<Option<UrlRecord>, AppError> {
        self.check()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .get(id)
            .filter(|r| !r.is_deleted)
            .cloned())
    }

    async fn update_active(
        &self,
        id: &str,
        update: UrlUpdate,
    ) -> Result<Option<UrlRecord>, AppError> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        match records.get_mut(id).filter(|r| !r.is_deleted) {
            Some(record) => {
                record.name = update.name;
                record.main_url = update.main_url;
                record.sub_urls = update.sub_urls;
                record.updated_at = update.updated_at;
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn soft_delete(&self, id: &str, deleted_at: DateTime<Utc>) -> Result<bool, AppError> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        match records.get_mut(id) {
            Some(record) => {
                record.is_deleted = true;
                record.deleted_at = Some(deleted_at);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub fn test_state(repository: Arc<InMemoryUrlRepository>) -> AppState {
    AppState {
        url_service: Arc::new(UrlService::new(repository)),
    }
}

/// Test server over the full application router, plus a handle to the
/// backing repository for direct store assertions.
pub fn test_server() -> (TestServer, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let server = TestServer::new(app_router(test_state(repository.clone()))).unwrap();
    (server, repository)
}

/// Test server whose repository fails every operation.
pub fn unreachable_server() -> TestServer {
    let repository = Arc::new(InMemoryUrlRepository::unreachable());
    TestServer::new(app_router(test_state(repository))).unwrap()
}
