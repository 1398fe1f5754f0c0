//! API error types and handling.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from client.
    BadRequest(String),
    /// The request came from a page on another origin.
    Forbidden(String),
    /// A request that cannot run in the current state (format already in flight).
    Conflict(String),
    /// Error from the flashdeck library.
    Flashdeck(flashdeck::FlashdeckError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg),
            ApiError::Flashdeck(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "flashdeck_error",
                e.to_string(),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<flashdeck::FlashdeckError> for ApiError {
    fn from(err: flashdeck::FlashdeckError) -> Self {
        ApiError::Flashdeck(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::Flashdeck(e) => write!(f, "Flashdeck error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
