//! HTTP request handlers.

pub mod image_handler;
pub mod user_handler;

pub use image_handler::image_routes;
pub use user_handler::user_routes;
