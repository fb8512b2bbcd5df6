//! User service

use async_trait::async_trait;
use uuid::Uuid;

use crate::{models::User, repository::MemoryStore};

/// Business-logic facade for users, with the same null/false-on-failure
/// contract as [`crate::services::BookService`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    async fn get_user_by_id(&self, user_id: Uuid) -> Option<User>;

    /// Persist a new user. `None` when a user with the same id already exists.
    async fn add_user(&self, user: User) -> Option<User>;

    /// Replace an existing user. `None` when the id is unknown.
    async fn update_user(&self, user: User) -> Option<User>;

    async fn delete_user(&self, user: User) -> bool;
}

/// Reference [`UserService`] over the in-memory store.
#[derive(Clone)]
pub struct UsersService {
    store: MemoryStore,
}

impl UsersService {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserService for UsersService {
    async fn get_user_by_id(&self, user_id: Uuid) -> Option<User> {
        self.store.get_user(user_id).await
    }

    async fn add_user(&self, user: User) -> Option<User> {
        self.store.insert_user(user).await
    }

    async fn update_user(&self, user: User) -> Option<User> {
        self.store.replace_user(user).await
    }

    async fn delete_user(&self, user: User) -> bool {
        self.store.remove_user(user.id).await
    }
}
