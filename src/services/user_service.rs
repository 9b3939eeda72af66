//! User service - Pass-through to the user repository.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create exactly one new user and return the persisted entity
    async fn create_user(&self, name: String, email: Option<String>) -> AppResult<User>;

    /// List all users; ordering is whatever the store provides
    async fn list_users(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService using the repository.
///
/// No transformation, no extra validation, no error translation: the
/// handler already validated the input and repository errors surface
/// unchanged.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, name: String, email: Option<String>) -> AppResult<User> {
        self.repo.create(name, email).await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }
}
