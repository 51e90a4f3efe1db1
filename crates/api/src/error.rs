//! API error types
//!
//! Provides structured error responses for the HTTP API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use farol_analytics::AnalyticsError;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request parameters
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Resource not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid week selection
    #[error("invalid week selection: {0}")]
    InvalidWeeks(String),

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),

    /// Analytics error
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    /// Store error
    #[error(transparent)]
    Store(#[from] farol_store::StoreError),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidWeeks(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // Store failures inside the engine are server-side problems;
            // everything else the analytics layer rejects is a bad request.
            Self::Analytics(AnalyticsError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Analytics(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidWeeks(_) => "INVALID_WEEKS",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Analytics(AnalyticsError::Store(_)) => "STORE_ERROR",
            Self::Analytics(_) => "ANALYTICS_ERROR",
            Self::Store(_) => "STORE_ERROR",
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code (machine-readable)
    pub error: &'static str,
    /// Error message (human-readable)
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.code(),
            message: self.to_string(),
        };

        tracing::warn!(
            error_code = body.error,
            error_message = %body.message,
            status = %status,
            "API error"
        );

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
