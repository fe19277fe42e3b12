//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::users_page_handler;
use axum::{Router, routing::get};

/// Dashboard routes, mounted under `/dashboard`.
///
/// # Endpoints
///
/// - `GET /users` - User management page
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/users", get(users_page_handler))
}
