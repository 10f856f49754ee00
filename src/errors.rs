//! Application error type and its HTTP translation.
//!
//! Every fallible path in the crate funnels into [`AppError`]; the
//! status-code and body mapping lives here so handlers never build
//! error responses by hand.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Result type alias used throughout the crate.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Resource not found")]
    NotFound,

    /// Raised only on registration; carries the conflicting email.
    #[error("email {0} is already registered")]
    DuplicateEmail(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Status code and machine-readable code for the client.
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::DuplicateEmail(_) => (StatusCode::CONFLICT, "DUPLICATE_EMAIL"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// Message safe to show the client. Server-side failures are logged
    /// in full and replaced with a generic line.
    fn client_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("database error: {e:?}");
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// JSON body: `{"error": {"code": ..., "message": ...}}`
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();
        let message = self.client_message();

        (status, Json(ErrorResponse { error: ErrorBody { code, message } })).into_response()
    }
}

/// Lets handlers turn an absent lookup into a 404 with one call.
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}
