use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by handlers and services.
///
/// `Validation`, `NotFound`, and `Store` carry the exact message the client
/// sees in the response envelope. `Database` wraps a driver error that no
/// service has translated yet; services are expected to map it to a `Store`
/// message, so one reaching response rendering is treated as an internal
/// error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Store(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Validation, not-found, and caught store failures are reported
        // in-band: the envelope says success=false while the HTTP status
        // stays 200. Only an untranslated database error becomes a 500.
        let (status, error) = match self {
            AppError::Validation(message)
            | AppError::NotFound(message)
            | AppError::Store(message) => (StatusCode::OK, message),
            AppError::Database(e) => {
                tracing::error!(error = %e, "unhandled database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = json!({ "success": false, "error": error });

        (status, Json(body)).into_response()
    }
}
