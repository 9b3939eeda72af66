//! Application state - Dependency injection container.
//!
//! Provides centralized access to services and infrastructure. Handlers
//! resolve their dependencies from here instead of constructing them.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{ImageClassifier, ImageService, UserManager, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Image prediction service (stub)
    pub image_service: Arc<dyn ImageService>,
    /// Database connection, exposed for health checks
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state wired to the given database.
    ///
    /// This is the production path: the repository and services are
    /// built over the shared pooled connection.
    pub fn from_database(database: Arc<Database>) -> Self {
        let user_repo = Arc::new(UserStore::new(database.get_connection()));

        Self {
            user_service: Arc::new(UserManager::new(user_repo)),
            image_service: Arc::new(ImageClassifier::new()),
            database,
        }
    }

    /// Create application state with manually injected services (tests).
    pub fn new(
        user_service: Arc<dyn UserService>,
        image_service: Arc<dyn ImageService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            user_service,
            image_service,
            database,
        }
    }
}
