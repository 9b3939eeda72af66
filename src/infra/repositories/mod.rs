//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! keeping the entity mapping isolated so the storage engine stays
//! swappable behind the trait.

pub(crate) mod entities;
mod user_repository;

pub use user_repository::{UserRepository, UserStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
