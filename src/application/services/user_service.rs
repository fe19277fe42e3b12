//! User management service.

use crate::domain::entities::{User, UserFields};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// The authoritative set of CRUD operations over users.
///
/// Generic over the repository so tests can inject mocks; the running
/// server uses `UserService<dyn UserRepository>` to pick the backend at
/// startup.
pub struct UserService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every stored user in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_all(&self) -> Result<Vec<User>, AppError> {
        let users = self.repository.list().await?;
        tracing::debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_by_id(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Stores a new user and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create(&self, fields: UserFields) -> Result<User, AppError> {
        let user = self.repository.create(fields).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Replaces name, email and age of an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist; storage is
    /// left untouched in that case.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update(&self, id: i64, fields: UserFields) -> Result<User, AppError> {
        let user = self
            .repository
            .update(id, fields)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(user_id = id, "User updated");
        Ok(user)
    }

    /// Deletes a user. Deleting an unknown id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            tracing::info!(user_id = id, "User deleted");
        } else {
            tracing::debug!(user_id = id, "Delete of unknown user ignored");
        }
        Ok(())
    }

    /// Number of stored users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Whether the backing storage responds.
    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }

    /// Name of the storage backend in use.
    pub fn backend(&self) -> &'static str {
        self.repository.backend()
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found("User not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use crate::infrastructure::persistence::InMemoryUserRepository;

    fn ana() -> UserFields {
        UserFields {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            age: 30,
        }
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.get_by_id(42).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_update()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.update(5, ana()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_delete()
            .withf(|id| *id == 9)
            .times(1)
            .returning(|_| Ok(false));

        let service = UserService::new(Arc::new(mock_repo));

        assert!(service.delete(9).await.is_ok());
    }

    #[tokio::test]
    async fn test_storage_error_propagates() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_list()
            .times(1)
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.list_all().await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_create_returns_input_fields() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|fields| Ok(User::from_fields(1, fields)));

        let service = UserService::new(Arc::new(mock_repo));

        let user = service.create(ana()).await.unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "ana@x.com");
        assert_eq!(user.age, 30);
    }

    #[tokio::test]
    async fn test_full_lifecycle() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::new()));

        let created = service.create(ana()).await.unwrap();
        assert_eq!(service.get_by_id(created.id).await.unwrap(), created);

        let updated = service
            .update(
                created.id,
                UserFields {
                    name: "Ana B.".to_string(),
                    email: "ana@x.com".to_string(),
                    age: 31,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Ana B.");
        assert_eq!(updated.age, 31);
        assert_eq!(service.get_by_id(created.id).await.unwrap(), updated);

        service.delete(created.id).await.unwrap();
        service.delete(created.id).await.unwrap();

        assert!(matches!(
            service.get_by_id(created.id).await.unwrap_err(),
            AppError::NotFound { .. }
        ));
        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_length_tracks_creates_and_deletes() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::new()));

        let mut ids = Vec::new();
        for _ in 0..5 {
            ids.push(service.create(ana()).await.unwrap().id);
        }
        service.delete(ids[1]).await.unwrap();
        service.delete(ids[3]).await.unwrap();
        service.delete(1_000).await.unwrap();

        assert_eq!(service.list_all().await.unwrap().len(), 3);
        assert_eq!(service.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_dyn_repository() {
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(repo);

        assert_eq!(service.backend(), "memory");
        assert!(service.health_check().await);
    }
}
