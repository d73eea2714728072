//! Error types for the Papiro server
//!
//! Only two classes of failure ever reach a client: request validation
//! problems and total inability to read or serialize the payload. Everything
//! inside the extraction pipeline degrades in place instead of erroring.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Rejected before any extraction work starts
    #[error("{0}")]
    Validation(String),

    /// The uploaded payload could not be read at all
    #[error("{0}")]
    Payload(String),

    /// Unexpected failure outside the pipeline's degradation paths
    #[error("{0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    details: String,
    timestamp: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "Invalid request"),
            AppError::Payload(msg) => {
                tracing::error!("Failed to read upload: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read uploaded file")
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to extract PDF content",
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details: self.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        });

        (status, body).into_response()
    }
}
