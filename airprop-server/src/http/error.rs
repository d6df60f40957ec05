//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Every error body is `{"error": <message>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str },

    /// Database error (500, logged, store message passed through)
    Database(sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::NotFound { resource } => {
                (StatusCode::NOT_FOUND, format!("{} not found", resource))
            }
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, .. } => Self::NotFound { resource },
            DbError::Sqlx(e) => Self::Database(e),
        }
    }
}
