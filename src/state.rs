//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::UserService;
use crate::domain::repositories::UserRepository;

/// Cloneable handle passed to every handler through axum's `State`.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<dyn UserRepository>>,
    /// When true, create/update bodies are validated before reaching the store.
    pub strict_validation: bool,
}

impl AppState {
    /// Builds state around an already constructed repository.
    pub fn new(repository: Arc<dyn UserRepository>, strict_validation: bool) -> Self {
        Self {
            user_service: Arc::new(UserService::new(repository)),
            strict_validation,
        }
    }
}
