//! Application services layer - Use cases.
//!
//! Services sit between the HTTP handlers and the repositories. They
//! carry no business logic of their own here; each call passes straight
//! through to the repository so the layering stays uniform. They depend
//! on abstractions (traits) for dependency inversion.

mod image_service;
mod user_service;

pub use image_service::{ImageClassifier, ImageService};
pub use user_service::{UserManager, UserService};
