//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{image_handler, user_handler};
use crate::domain::{PredictionResponse, UserResponse};

/// OpenAPI documentation for the Vision API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vision API",
        version = "0.1.0",
        description = "User management and image prediction API built with Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::create_user,
        user_handler::list_users,
        // Image endpoints
        image_handler::predict,
    ),
    components(
        schemas(
            // Domain types
            UserResponse,
            PredictionResponse,
            // User handler types
            user_handler::CreateUserRequest,
        )
    ),
    tags(
        (name = "Users", description = "User management operations"),
        (name = "Image", description = "Image prediction operations")
    )
)]
pub struct ApiDoc;
