//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Health check with database probe
//! - `/api/*`        - URL registry REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling, applied at serve time

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::api;
use crate::api::dto::ApiResponse;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// Requests matching no route, and requests hitting a known path with an
/// unsupported method, fall through to the same JSON 404 envelope instead
/// of axum's empty defaults. There is no separate 405 surface; a method
/// mismatch is an unknown endpoint.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .fallback(fallback_handler)
        .method_not_allowed_fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer())
}

async fn fallback_handler() -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error("Endpoint not found")),
    )
}
