//! API route configuration.

use crate::api::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// User CRUD routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /users`               - List all users
/// - `POST   /users`               - Create a user
/// - `GET    /users/{id}`          - Fetch a user
/// - `PUT    /users/{id}`          - Replace name, email and age
/// - `DELETE /users/{id}`          - Delete a user (idempotent)
/// - `POST   /users/{id}/update`   - Alias for `PUT /users/{id}`
/// - `POST   /users/{id}/delete`   - Alias for `DELETE /users/{id}`
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route("/users/{id}/update", post(update_user_handler))
        .route("/users/{id}/delete", post(delete_user_handler))
}
