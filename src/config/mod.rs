//! Application configuration module
//!
//! Handles environment variables read once at startup.

mod settings;

pub use settings::Config;
