//! DTOs for the health endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health report covering the service and its database connection.
///
/// Served with HTTP 200 in both states; clients read `status` instead of
/// the status code.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    /// Report for a reachable database.
    pub fn connected(timestamp: DateTime<Utc>) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp,
            database: "connected".to_string(),
            error: None,
        }
    }

    /// Report for a failed connectivity probe, carrying its detail.
    pub fn disconnected(timestamp: DateTime<Utc>, error: String) -> Self {
        Self {
            status: "error".to_string(),
            timestamp,
            database: "disconnected".to_string(),
            error: Some(error),
        }
    }
}
