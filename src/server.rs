//! HTTP server initialization and runtime setup.
//!
//! Selects the storage backend, applies migrations and runs the Axum server
//! until a shutdown signal arrives.

use crate::config::Config;
use crate::domain::repositories::UserRepository;
use crate::infrastructure::persistence::{InMemoryUserRepository, PgUserRepository};
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
/// Initializes:
/// - PostgreSQL connection pool and migrations, or the in-memory store when
///   no database is configured
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;
    tracing::info!(backend = repository.backend(), "User store ready");

    let state = AppState::new(repository, config.strict_validation);
    let router = app_router(state, &config.cors_allowed_origin)?;
    let app = NormalizePathLayer::trim_trailing_slash().layer(router);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Connects to PostgreSQL when configured, otherwise falls back to memory.
async fn build_repository(config: &Config) -> Result<Arc<dyn UserRepository>> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("No database configured; users are kept in memory only");
        return Ok(Arc::new(InMemoryUserRepository::new()));
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    Ok(Arc::new(PgUserRepository::new(Arc::new(pool))))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
