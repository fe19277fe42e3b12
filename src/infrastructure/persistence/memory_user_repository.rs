//! In-memory implementation of the user repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{User, UserFields};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

#[derive(Debug)]
struct Inner {
    next_id: i64,
    users: BTreeMap<i64, User>,
}

/// Process-local user store.
///
/// A single lock guards both the map and the id counter. Ids grow
/// monotonically and are never handed out twice, even after deletion, so
/// iterating the `BTreeMap` yields insertion order.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    inner: RwLock<Inner>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                users: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, fields: UserFields) -> Result<User, AppError> {
        let mut inner = self.inner.write().await;

        let id = inner.next_id;
        inner.next_id += 1;

        let user = User::from_fields(id, fields);
        inner.users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.inner.read().await.users.values().cloned().collect())
    }

    async fn update(&self, id: i64, fields: UserFields) -> Result<Option<User>, AppError> {
        let mut inner = self.inner.write().await;

        Ok(inner.users.get_mut(&id).map(|user| {
            user.apply(fields);
            user.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.inner.write().await.users.remove(&id).is_some())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.inner.read().await.users.len() as i64)
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
