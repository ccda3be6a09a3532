//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Status Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store error → HTTP status                            │
//! │                                                                         │
//! │  StoreError::NotFound                 ──► 404 NOT_FOUND                │
//! │  StoreError::InvalidId                ──► 404 INVALID_ID               │
//! │  StoreError::Conflict                 ──► 409 CONFLICT                 │
//! │  StoreError::IdsExhausted             ──► 404 IDS_EXHAUSTED            │
//! │  ValidationError::EmptyPatch          ──► 204 EMPTY_PATCH              │
//! │  ValidationError::{Missing,Invalid}*  ──► 404 VALIDATION_ERROR         │
//! │                                                                         │
//! │  Unreadable request body:  POST ──► 404   PUT ──► 204                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Response Body
//! ```json
//! {
//!   "code": "CONFLICT",
//!   "message": "Item with id \"0\" exists already"
//! }
//! ```
//! A 204 response carries no body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use mmshop_core::ValidationError;
use mmshop_store::StoreError;

/// API error returned from handlers.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// HTTP status of the response
    #[serde(skip)]
    pub status: StatusCode,

    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Path or payload id is not an integer (404)
    InvalidId,

    /// Candidate failed validation (404)
    ValidationError,

    /// Update payload without fields (204)
    EmptyPatch,

    /// Id already taken (409)
    Conflict,

    /// No id left to assign (404)
    IdsExhausted,

    /// Request body is not a JSON object
    UnreadableBody,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::NOT_FOUND, ErrorCode::NotFound, message)
    }

    /// Creates an error for a request body that could not be processed.
    pub fn unreadable_body(status: StatusCode, reason: impl std::fmt::Display) -> Self {
        ApiError::new(
            status,
            ErrorCode::UnreadableBody,
            format!("Can not process data: {}", reason),
        )
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::NotFound { .. } => ApiError::not_found(message),
            StoreError::InvalidId { .. } => {
                ApiError::new(StatusCode::NOT_FOUND, ErrorCode::InvalidId, message)
            }
            StoreError::Conflict { .. } => {
                ApiError::new(StatusCode::CONFLICT, ErrorCode::Conflict, message)
            }
            StoreError::IdsExhausted { .. } => {
                ApiError::new(StatusCode::NOT_FOUND, ErrorCode::IdsExhausted, message)
            }
            StoreError::Validation(ValidationError::EmptyPatch) => {
                ApiError::new(StatusCode::NO_CONTENT, ErrorCode::EmptyPatch, message)
            }
            StoreError::Validation(_) => {
                ApiError::new(StatusCode::NOT_FOUND, ErrorCode::ValidationError, message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(
            status = self.status.as_u16(),
            code = ?self.code,
            message = %self.message,
            "Request rejected"
        );

        if self.status == StatusCode::NO_CONTENT {
            return self.status.into_response();
        }

        (self.status, Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} {:?}] {}", self.status.as_u16(), self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Server startup and runtime errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_status_mapping() {
        let cases = [
            (StoreError::not_found(9), StatusCode::NOT_FOUND, ErrorCode::NotFound),
            (StoreError::invalid_id("x"), StatusCode::NOT_FOUND, ErrorCode::InvalidId),
            (StoreError::conflict(0), StatusCode::CONFLICT, ErrorCode::Conflict),
            (
                StoreError::IdsExhausted { max: i64::MAX },
                StatusCode::NOT_FOUND,
                ErrorCode::IdsExhausted,
            ),
            (
                ValidationError::EmptyPatch.into(),
                StatusCode::NO_CONTENT,
                ErrorCode::EmptyPatch,
            ),
            (
                ValidationError::missing("price").into(),
                StatusCode::NOT_FOUND,
                ErrorCode::ValidationError,
            ),
            (
                ValidationError::invalid("id", "integer").into(),
                StatusCode::NOT_FOUND,
                ErrorCode::ValidationError,
            ),
        ];

        for (store_err, status, code) in cases {
            let api_err = ApiError::from(store_err);
            assert_eq!(api_err.status, status);
            assert_eq!(api_err.code, code);
        }
    }

    #[test]
    fn test_error_body_serialization() {
        let err = ApiError::from(StoreError::conflict(0));
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "code": "CONFLICT",
                "message": "Item with id \"0\" exists already"
            })
        );
    }

    #[test]
    fn test_no_content_response_has_empty_body() {
        let response = ApiError::from(StoreError::from(ValidationError::EmptyPatch)).into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.headers().get(axum::http::header::CONTENT_TYPE).is_none());
    }
}
