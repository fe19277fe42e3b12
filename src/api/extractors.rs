//! Request extractors that report failures through [`AppError`].
//!
//! axum's stock `Json` and `Path` rejections answer with plain text and, for
//! JSON, a 422 status. These wrappers turn them into the usual 400 error
//! envelope.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;

/// JSON body that is validated before the handler runs.
///
/// Validation only happens when [`AppState::strict_validation`] is set;
/// otherwise any structurally valid body passes.
///
/// ```rust,ignore
/// async fn create(ValidatedJson(payload): ValidatedJson<UserPayload>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T> FromRequest<AppState> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        if state.strict_validation {
            value.validate()?;
        }

        Ok(ValidatedJson(value))
    }
}

/// Numeric `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;
        Ok(UserId(id))
    }
}
