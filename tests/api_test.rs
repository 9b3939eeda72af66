//! Integration tests for API endpoints.
//!
//! These tests drive the real router through `tower::ServiceExt::oneshot`
//! with an in-memory user service, so no database connection is needed.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;

use vision_api::api::{create_router, AppState};
use vision_api::domain::User;
use vision_api::errors::AppResult;
use vision_api::infra::Database;
use vision_api::services::{ImageClassifier, UserService};

// =============================================================================
// Test Fixtures
// =============================================================================

/// In-memory user service backing the router under test.
///
/// Ids are assigned sequentially starting at 1, mirroring the database
/// auto-increment behavior.
struct InMemoryUserService {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserService {
    fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl UserService for InMemoryUserService {
    async fn create_user(&self, name: String, email: Option<String>) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = User {
            id: users.len() as i32 + 1,
            name,
            email,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }
}

/// Build a router over the in-memory service.
///
/// The database handle is a disconnected stub; only the health endpoint
/// touches it, and it reports the outage instead of panicking.
fn test_app() -> Router {
    let database = Arc::new(Database::from_connection(DatabaseConnection::default()));
    let state = AppState::new(
        Arc::new(InMemoryUserService::new()),
        Arc::new(ImageClassifier::new()),
        database,
    );
    create_router(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// User Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_create_user_returns_created_user() {
    let app = test_app();

    let response = app
        .oneshot(json_request("POST", "/users", json!({"name": "Alice"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body, json!({"id": 1, "name": "Alice"}));
}

#[tokio::test]
async fn test_create_user_with_email() {
    let app = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"name": "Alice", "email": "alice@example.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(
        body,
        json!({"id": 1, "name": "Alice", "email": "alice@example.com"})
    );
}

#[tokio::test]
async fn test_created_users_appear_in_list() {
    let app = test_app();

    let first = app
        .clone()
        .oneshot(json_request("POST", "/users", json!({"name": "Alice"})))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"name": "Bob", "email": "bob@example.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CREATED);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/users")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "Alice"},
            {"id": 2, "name": "Bob", "email": "bob@example.com"}
        ])
    );
}

#[tokio::test]
async fn test_list_users_empty() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/users")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_user_missing_name_is_rejected() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/users", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Rejected requests must not leave partial rows behind
    let list = app
        .oneshot(
            Request::builder()
                .uri("/users")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = response_json(list).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_user_blank_name_is_rejected() {
    let app = test_app();

    let response = app
        .oneshot(json_request("POST", "/users", json!({"name": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Name cannot be empty"));
}

#[tokio::test]
async fn test_create_user_invalid_email_is_rejected() {
    let app = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"name": "Alice", "email": "not-an-email"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_user_ignores_client_supplied_id() {
    let app = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"id": 99, "name": "Carol"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn test_duplicate_payloads_create_distinct_users() {
    let app = test_app();

    let first = app
        .clone()
        .oneshot(json_request("POST", "/users", json!({"name": "Alice"})))
        .await
        .unwrap();
    let second = app
        .oneshot(json_request("POST", "/users", json!({"name": "Alice"})))
        .await
        .unwrap();

    let first_body = response_json(first).await;
    let second_body = response_json(second).await;
    assert_eq!(first_body["id"], 1);
    assert_eq!(second_body["id"], 2);
}

// =============================================================================
// Image Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_predict_returns_not_implemented() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/image/predict")
                .header(header::CONTENT_TYPE, "application/octet-stream")
                .body(Body::from(vec![0xFFu8, 0xD8, 0xFF, 0xE0]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_IMPLEMENTED");
}

// =============================================================================
// Root and Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_root_returns_welcome_message() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"Welcome to Vision API");
}

#[tokio::test]
async fn test_health_reports_degraded_without_database() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = response_json(response).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["database"]["status"], "unhealthy");
}
