//! User CRUD handlers.
//!
//! Handlers translate HTTP requests into service calls and service
//! results into responses. Not-found translation and identifier
//! pinning for updates happen here, not in the service.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{NewUser, User, UserResponse};
use crate::errors::{AppResult, OptionExt};

/// User creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "123456")]
    pub password: String,
    /// User display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "John Doe")]
    pub name: String,
}

/// User update request.
///
/// Carries the full replacement value. An identifier present in the
/// body is ignored; the path parameter wins.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "123456")]
    pub password: String,
    /// User display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "John Doe")]
    pub name: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.find_all_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .find_user_by_id(id)
        .await?
        .ok_or_not_found()?;

    Ok(Json(UserResponse::from(user)))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .user_service
        .create_user(NewUser::new(payload.email, payload.password, payload.name))
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Update user (full replacement)
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    // The update targets an existing row or nothing at all.
    state
        .user_service
        .find_user_by_id(id)
        .await?
        .ok_or_not_found()?;

    // Pin the identifier to the path parameter before delegating; an
    // id supplied in the body is never trusted.
    let replacement = User {
        id,
        email: payload.email,
        password: payload.password,
        name: payload.name,
    };

    let updated = state.user_service.update_user(replacement).await?;
    Ok(Json(UserResponse::from(updated)))
}

/// Delete user, returning the deleted record
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted, body carries the pre-deletion snapshot", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .find_user_by_id(id)
        .await?
        .ok_or_not_found()?;

    state.user_service.delete_user_by_id(id).await?;

    Ok(Json(UserResponse::from(user)))
}
