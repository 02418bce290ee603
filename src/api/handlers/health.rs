//! Handler for health check endpoint.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::api::dto::HealthResponse;
use crate::state::AppState;

/// Returns service health with a live database connectivity probe.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// Always HTTP 200; the body distinguishes the states.
///
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2026-08-22T10:00:00Z",
///   "database": "connected"
/// }
/// ```
///
/// When the probe fails, `status` is `"error"`, `database` is
/// `"disconnected"`, and `error` carries the probe failure detail.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let timestamp = Utc::now();

    match state.url_service.check_store().await {
        Ok(()) => Json(HealthResponse::connected(timestamp)),
        Err(e) => {
            tracing::warn!(error = %e, "health probe failed");
            Json(HealthResponse::disconnected(timestamp, e.to_string()))
        }
    }
}
