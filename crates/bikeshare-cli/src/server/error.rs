//! API error types and handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bikeshare::BikeshareError;
use serde::Serialize;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Error from the bikeshare library.
    Bikeshare(BikeshareError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Bikeshare(e) => match &e {
                BikeshareError::InvalidRange { .. } => {
                    (StatusCode::BAD_REQUEST, "invalid_range", e.to_string())
                }
                BikeshareError::InvalidSelection(_) => {
                    (StatusCode::BAD_REQUEST, "invalid_selection", e.to_string())
                }
                _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal", e.to_string()),
            },
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

impl From<BikeshareError> for ApiError {
    fn from(err: BikeshareError) -> Self {
        ApiError::Bikeshare(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Bikeshare(e) => write!(f, "Bikeshare error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
