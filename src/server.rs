//! HTTP server initialization and runtime setup.
//!
//! Handles database connection, migrations, and Axum server lifecycle.

use crate::application::services::UrlService;
use crate::config::Config;
use crate::infrastructure::persistence::PgUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Startup is sequential and fail-fast: the process connects to
/// PostgreSQL and applies pending migrations before binding the listener,
/// so a misconfigured database stops the service instead of serving
/// requests that can only fail.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Migrations fail to apply
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply database migrations")?;
    tracing::info!("Migrations applied");

    let repository = Arc::new(PgUrlRepository::new(Arc::new(pool)));
    let url_service = Arc::new(UrlService::new(repository));
    let state = AppState { url_service };

    // Trailing-slash normalization has to wrap the whole router, so it is
    // layered here instead of inside app_router.
    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind listen address")?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when Ctrl+C is received, letting in-flight requests finish.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install shutdown signal handler");
        return;
    }
    tracing::info!("Shutdown signal received, draining connections");
}
