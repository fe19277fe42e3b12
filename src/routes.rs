//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /health`        - Health check (storage)
//! - `/api/users*`         - User CRUD API
//! - `/dashboard/users`    - HTML overview
//!
//! # Middleware
//!
//! - **CORS** - Admits the configured browser origin on every route
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `allowed_origin` - browser origin reflected in CORS headers
///
/// # Errors
///
/// Returns an error if `allowed_origin` is not a valid header value.
pub fn app_router(state: AppState, allowed_origin: &str) -> anyhow::Result<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::user_routes())
        .nest("/dashboard", web::routes::dashboard_routes())
        .with_state(state)
        .layer(cors::layer(allowed_origin)?)
        .layer(tracing::layer());

    Ok(router)
}
