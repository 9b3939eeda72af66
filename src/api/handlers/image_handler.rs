//! Image prediction handler.

use axum::{body::Bytes, extract::State, response::Json, routing::post, Router};

use crate::api::AppState;
use crate::domain::PredictionResponse;
use crate::errors::AppResult;

/// Create image routes
pub fn image_routes() -> Router<AppState> {
    Router::new().route("/predict", post(predict))
}

/// Predict a label for an uploaded image
///
/// Accepts the raw request body as image bytes. Always answers 501
/// until an inference backend is wired up.
#[utoipa::path(
    post,
    path = "/image/predict",
    tag = "Image",
    request_body(content = Vec<u8>, description = "Raw image bytes", content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Predicted label", body = PredictionResponse),
        (status = 501, description = "No inference backend available")
    )
)]
pub async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<PredictionResponse>> {
    let prediction = state.image_service.predict(body.to_vec()).await?;
    Ok(Json(prediction))
}
