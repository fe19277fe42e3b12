//! Handlers for user CRUD endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::user::{UserPayload, UserResponse};
use crate::api::extractors::{UserId, ValidatedJson};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users in insertion order.
///
/// # Endpoint
///
/// `GET /api/users`
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_all().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Returns a single user.
///
/// # Endpoint
///
/// `GET /api/users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn get_user_handler(
    UserId(id): UserId,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_by_id(id).await?;

    Ok(Json(user.into()))
}

/// Creates a user. Any `id` in the body is ignored.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// { "name": "Ana", "email": "ana@x.com", "age": 30 }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is malformed or, with strict validation, invalid.
pub async fn create_user_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.create(payload.into()).await?;

    Ok(Json(user.into()))
}

/// Replaces name, email and age of a user.
///
/// # Endpoint
///
/// `PUT /api/users/{id}` and `POST /api/users/{id}/update`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
/// Returns 400 if the body is malformed or, with strict validation, invalid.
pub async fn update_user_handler(
    UserId(id): UserId,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.update(id, payload.into()).await?;

    Ok(Json(user.into()))
}

/// Deletes a user. Unknown ids succeed as well.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}` and `POST /api/users/{id}/delete`
pub async fn delete_user_handler(
    UserId(id): UserId,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
