//! Image service - Prediction stub.
//!
//! There is no inference backend. The trait keeps the handler tier
//! pass-through and marks the seam where decoding and a model would
//! plug in.

use async_trait::async_trait;

use crate::domain::PredictionResponse;
use crate::errors::{AppError, AppResult};

/// Image service trait for dependency injection.
#[async_trait]
pub trait ImageService: Send + Sync {
    /// Predict a label for raw image bytes
    async fn predict(&self, image: Vec<u8>) -> AppResult<PredictionResponse>;
}

/// Placeholder implementation until an inference backend exists.
#[derive(Default)]
pub struct ImageClassifier;

impl ImageClassifier {
    /// Create new image service instance
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImageService for ImageClassifier {
    async fn predict(&self, image: Vec<u8>) -> AppResult<PredictionResponse> {
        tracing::debug!(bytes = image.len(), "prediction requested, no backend wired");
        Err(AppError::NotImplemented)
    }
}
