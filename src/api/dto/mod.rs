//! Request and response DTOs for the HTTP API.

pub mod envelope;
pub mod health;
pub mod url;

pub use envelope::ApiResponse;
pub use health::HealthResponse;
pub use url::{UrlPayload, UrlResponse};
