//! Image prediction response shape.

use serde::Serialize;
use utoipa::ToSchema;

/// Predicted label for an uploaded image.
///
/// Declared so the API contract is documented; no inference backend
/// produces it yet.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PredictionResponse {
    /// Label assigned to the image
    #[schema(example = "cat")]
    pub prediction: String,
}
