//! Router assembly: health endpoints, API docs, and the user CRUD
//! surface.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::user_routes;
use super::openapi::ApiDoc;
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/users", user_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> &'static str {
    "Welcome to User API"
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Reports overall and database health; 503 when the store is
/// unreachable.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.database.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                database: "up",
                error: None,
            }),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unhealthy",
                database: "down",
                error: Some(e.to_string()),
            }),
        ),
    }
}
