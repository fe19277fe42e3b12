//! Repository trait for user records.

use crate::domain::entities::{User, UserFields};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for users.
///
/// Each method is atomic with respect to the record it touches.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user under a freshly assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, fields: UserFields) -> Result<User, AppError>;

    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Lists all users ordered by id (insertion order).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Replaces name, email and age of an existing user.
    ///
    /// Returns `None` without touching storage when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, id: i64, fields: UserFields) -> Result<Option<User>, AppError>;

    /// Removes a user. Returns whether a record was actually removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Checks that the backing storage is reachable.
    async fn health_check(&self) -> bool;

    /// Short name of the storage backend, used in logs and health output.
    fn backend(&self) -> &'static str;
}
