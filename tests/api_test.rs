//! Integration tests for API endpoints.
//!
//! These tests drive the full router with an in-memory user service
//! substituted for the database-backed one, so no database connection
//! is required.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use user_api::api::{create_router, AppState};
use user_api::domain::{NewUser, User};
use user_api::errors::{AppError, AppResult};
use user_api::infra::Database;
use user_api::services::UserService;

// =============================================================================
// In-memory user service
// =============================================================================

/// User service fake with the same observable behavior as the real one
#[derive(Default)]
struct InMemoryUserService {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserService {
    fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users.into_iter().map(|u| (u.id, u)).collect()),
        }
    }
}

#[async_trait]
impl UserService for InMemoryUserService {
    async fn find_all_users(&self) -> AppResult<Vec<User>> {
        Ok(self.users.lock().unwrap().values().cloned().collect())
    }

    async fn find_user_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::DuplicateEmail(user.email));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: user.email,
            password: user.password,
            name: user.name,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_user(&self, user: User) -> AppResult<User> {
        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_user_by_id(&self, id: Uuid) -> AppResult<()> {
        self.users.lock().unwrap().remove(&id);
        Ok(())
    }
}

// =============================================================================
// Test helpers
// =============================================================================

fn test_app(service: InMemoryUserService) -> axum::Router {
    // The user routes never touch the database; a disconnected handle
    // satisfies the state's shape.
    let database = Arc::new(Database::from_connection(
        sea_orm::DatabaseConnection::default(),
    ));
    let state = AppState::new(Arc::new(service), database);
    create_router(state)
}

fn sample_user(email: &str, name: &str) -> User {
    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        password: "123456".to_string(),
        name: name.to_string(),
    }
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// GET /api/users
// =============================================================================

#[tokio::test]
async fn test_fetch_all_users() {
    let app = test_app(InMemoryUserService::with_users(vec![
        sample_user("giangnt@gmail.com", "GiangNT"),
        sample_user("nhipt@gmail.com", "NhiPT"),
        sample_user("linhntk@gmail.com", "LinhNTK"),
    ]));

    let response = app.oneshot(get_request("/api/users")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

// =============================================================================
// GET /api/users/{id}
// =============================================================================

#[tokio::test]
async fn test_fetch_one_user_by_id() {
    let user = sample_user("giangnt@gmail.com", "GiangNT");
    let app = test_app(InMemoryUserService::with_users(vec![user.clone()]));

    let response = app
        .oneshot(get_request(&format!("/api/users/{}", user.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["email"], "giangnt@gmail.com");
    assert_eq!(body["name"], "GiangNT");
}

#[tokio::test]
async fn test_fetch_absent_user_returns_404() {
    let app = test_app(InMemoryUserService::default());

    let response = app
        .oneshot(get_request(&format!("/api/users/{}", Uuid::new_v4())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// POST /api/users
// =============================================================================

#[tokio::test]
async fn test_create_new_user() {
    let app = test_app(InMemoryUserService::default());

    let payload = json!({
        "email": "newuser@gmail.com",
        "password": "123456",
        "name": "New User"
    });
    let response = app
        .oneshot(json_request("POST", "/api/users", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["email"], "newuser@gmail.com");
    assert_eq!(body["password"], "123456");
    assert_eq!(body["name"], "New User");
    assert!(body["id"].as_str().unwrap().parse::<Uuid>().is_ok());
}

#[tokio::test]
async fn test_create_user_with_taken_email_returns_409() {
    let app = test_app(InMemoryUserService::with_users(vec![sample_user(
        "a@x.com", "Existing",
    )]));

    let payload = json!({
        "email": "a@x.com",
        "password": "123456",
        "name": "Late Arrival"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/users", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "DUPLICATE_EMAIL");

    // The store still holds exactly one record
    let response = app.oneshot(get_request("/api/users")).await.unwrap();
    let body = response_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_user_with_malformed_email_returns_400() {
    let app = test_app(InMemoryUserService::default());

    let payload = json!({
        "email": "not-an-email",
        "password": "123456",
        "name": "Broken"
    });
    let response = app
        .oneshot(json_request("POST", "/api/users", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// PUT /api/users/{id}
// =============================================================================

#[tokio::test]
async fn test_update_absent_user_returns_404() {
    let app = test_app(InMemoryUserService::default());

    let payload = json!({
        "email": "user1@gmail.com",
        "password": "pwd",
        "name": "Name"
    });
    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/users/{}", Uuid::new_v4()),
            &payload,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_user() {
    let user = sample_user("user1@gmail.com", "Name");
    let app = test_app(InMemoryUserService::with_users(vec![user.clone()]));

    let payload = json!({
        "email": "user1@gmail.com",
        "password": "pwd",
        "name": "Renamed"
    });
    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/users/{}", user.id),
            &payload,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["id"], user.id.to_string());
    assert_eq!(body["name"], "Renamed");
    assert_eq!(body["password"], "pwd");
}

#[tokio::test]
async fn test_update_pins_identifier_to_path() {
    let user = sample_user("user1@gmail.com", "Name");
    let app = test_app(InMemoryUserService::with_users(vec![user.clone()]));

    // The body claims a different identifier; the path must win.
    let body_id = Uuid::new_v4();
    let payload = json!({
        "id": body_id,
        "email": "user1@gmail.com",
        "password": "pwd",
        "name": "Renamed"
    });
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/users/{}", user.id),
            &payload,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["id"], user.id.to_string());

    // No row materialized under the body-supplied identifier
    let response = app
        .oneshot(get_request(&format!("/api/users/{}", body_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// DELETE /api/users/{id}
// =============================================================================

#[tokio::test]
async fn test_delete_user_returns_snapshot() {
    let user = sample_user("user1@gmail.com", "User1");
    let app = test_app(InMemoryUserService::with_users(vec![user.clone()]));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/users/{}", user.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["email"], "user1@gmail.com");
    assert_eq!(body["password"], "123456");
    assert_eq!(body["name"], "User1");

    // A second delete finds nothing to snapshot
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/users/{}", user.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_absent_user_returns_404() {
    let app = test_app(InMemoryUserService::default());

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/users/{}", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Root endpoint
// =============================================================================

#[tokio::test]
async fn test_root_endpoint_returns_welcome_message() {
    let app = test_app(InMemoryUserService::default());

    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"Welcome to User API");
}
