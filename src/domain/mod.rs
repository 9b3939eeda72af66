//! Domain layer - Core business entities
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod image;
pub mod user;

pub use image::PredictionResponse;
pub use user::{User, UserResponse};
