//! API route configuration.

use crate::api::handlers::{
    create_url_handler, delete_url_handler, get_url_handler, list_urls_handler, update_url_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All registry routes, mounted under `/api` by the application router.
///
/// # Endpoints
///
/// - `GET    /urls`       - List active records ordered by name
/// - `POST   /urls`       - Create a record
/// - `GET    /urls/{id}`  - Fetch a record by id
/// - `PUT    /urls/{id}`  - Overwrite a record
/// - `DELETE /urls/{id}`  - Soft-delete a record
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", get(list_urls_handler).post(create_url_handler))
        .route(
            "/urls/{id}",
            get(get_url_handler)
                .put(update_url_handler)
                .delete(delete_url_handler),
        )
}
