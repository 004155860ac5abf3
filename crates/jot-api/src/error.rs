//! Error-to-response mapping.
//!
//! Every handler returns `Result<impl IntoResponse, ApiError>`; this module
//! is the single place where failures become HTTP statuses and JSON bodies.

use axum::{http::StatusCode, response::IntoResponse, Json};

/// Handler-level error. Converts into a JSON error response.
#[derive(Debug)]
pub enum ApiError {
    /// Persistence or hashing failure surfaced generically.
    Database(jot_core::Error),
    Unauthorized(String),
    NotFound(String),
    BadRequest(String),
    /// Aggregated field validation failures, reported together.
    Validation(Vec<String>),
}

impl From<jot_core::Error> for ApiError {
    fn from(err: jot_core::Error) -> Self {
        match err {
            jot_core::Error::NotFound(msg) => ApiError::NotFound(msg),
            jot_core::Error::InvalidId(_) => {
                ApiError::BadRequest("Invalid note ID format".to_string())
            }
            jot_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            // Conflict surfaced as 400, matching the registration contract.
            jot_core::Error::DuplicateUsername(_) => {
                ApiError::BadRequest("Username already taken".to_string())
            }
            jot_core::Error::Unauthorized(msg) => ApiError::Unauthorized(msg),
            other => ApiError::Database(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Database(err) => {
                tracing::error!(error = %err, "Unexpected failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Validation(errors) => {
                let body = Json(serde_json::json!({ "errors": errors }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
