//! Application settings loaded from environment variables.

use std::env;

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file first when one is present.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set; the process must not start
    /// without a connection string.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL environment variable must be set");

        Self { database_url }
    }
}
