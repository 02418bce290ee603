//! Handlers for URL registry endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::{ApiResponse, UrlPayload, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all active records, ordered by name.
///
/// # Endpoint
///
/// `GET /api/urls`
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UrlResponse>>>, AppError> {
    let urls = state.url_service.list_urls().await?;

    let responses = urls.into_iter().map(UrlResponse::from).collect();

    Ok(Json(ApiResponse::data(responses)))
}

/// Fetches a single record by id.
///
/// # Endpoint
///
/// `GET /api/urls/{id}`
///
/// # Errors
///
/// Unknown and soft-deleted ids both report `URL not found` in the
/// response envelope.
pub async fn get_url_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<UrlResponse>>, AppError> {
    let url = state.url_service.get_url(&id).await?;

    Ok(Json(ApiResponse::data(url.into())))
}

/// Creates a record from the submitted payload.
///
/// # Endpoint
///
/// `POST /api/urls`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Docs",
///   "mainUrl": "https://docs.example.com",
///   "subUrls": { "api": "https://api.example.com" }  // optional
/// }
/// ```
///
/// # Errors
///
/// Reports `Name and mainUrl are required` in the envelope when either
/// required field is missing or empty.
pub async fn create_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<UrlPayload>,
) -> Result<Json<ApiResponse<UrlResponse>>, AppError> {
    let input = payload.into_new_url()?;

    let url = state.url_service.create_url(input).await?;

    Ok(Json(ApiResponse::data(url.into())))
}

/// Overwrites a record with the submitted payload.
///
/// # Endpoint
///
/// `PUT /api/urls/{id}`
///
/// # Behavior
///
/// Full replacement: omitting `subUrls` clears the stored map rather than
/// keeping it. `updated_at` is refreshed; `created_at` is untouched.
///
/// # Errors
///
/// The payload is validated like create. Updating an unknown or
/// soft-deleted id reports `URL not found`.
pub async fn update_url_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UrlPayload>,
) -> Result<Json<ApiResponse<UrlResponse>>, AppError> {
    let input = payload.into_new_url()?;

    let url = state.url_service.update_url(&id, input).await?;

    Ok(Json(ApiResponse::data(url.into())))
}

/// Soft-deletes a record.
///
/// # Endpoint
///
/// `DELETE /api/urls/{id}`
///
/// # Behavior
///
/// The record stays in the database with `is_deleted` set and `deleted_at`
/// stamped; it disappears from list and get. Repeating the delete succeeds
/// again with a refreshed `deleted_at`.
///
/// # Errors
///
/// Reports `URL not found` only for ids that never existed.
pub async fn delete_url_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.url_service.delete_url(&id).await?;

    Ok(Json(ApiResponse::message("URL deleted successfully")))
}
