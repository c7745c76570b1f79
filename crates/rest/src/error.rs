//! Error types for the clinic REST API.
//!
//! This module defines all error types used throughout the REST API layer,
//! with automatic conversion to JSON error bodies.
//!
//! # Error Mapping
//!
//! Storage errors from the persistence layer are mapped to HTTP status codes:
//!
//! | Storage Error | HTTP Status | Body |
//! |--------------|-------------|------|
//! | NotFound | 404 | `{"error": "Not found"}` |
//! | DuplicateEmail | 409 | `{"error": "Email already exists"}` |
//! | BackendError | 500 | `{"error": "Server error"}` |
//!
//! Backend details never reach the client; they are logged instead.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_persistence::error::{ResourceError, StorageError};
use serde_json::json;
use std::fmt;
use tracing::error;

use crate::validation::{ValidationErrors, ValidationIssue};

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Malformed or invalid input (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
        /// Per-field problems, empty when the request as a whole is at fault.
        issues: Vec<ValidationIssue>,
    },

    /// No doctor matched the id (HTTP 404).
    NotFound,

    /// Email uniqueness violated (HTTP 409).
    Conflict {
        /// Error message.
        message: String,
    },

    /// Request body exceeded the configured limit (HTTP 413).
    PayloadTooLarge,

    /// Storage became unavailable (HTTP 503).
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500). The message is logged, not returned.
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Creates a bad request error without field issues.
    pub fn bad_request(message: impl Into<String>) -> Self {
        RestError::BadRequest {
            message: message.into(),
            issues: Vec::new(),
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::NotFound => StatusCode::NOT_FOUND,
            RestError::Conflict { .. } => StatusCode::CONFLICT,
            RestError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::BadRequest { message, .. } => write!(f, "Bad request: {}", message),
            RestError::NotFound => write!(f, "Not found"),
            RestError::Conflict { message } => write!(f, "Conflict: {}", message),
            RestError::PayloadTooLarge => write!(f, "Payload too large"),
            RestError::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {}", message)
            }
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            RestError::BadRequest { message, issues } if issues.is_empty() => {
                json!({ "error": message })
            }
            RestError::BadRequest { message, issues } => {
                json!({ "error": message, "issues": issues })
            }
            RestError::NotFound => json!({ "error": "Not found" }),
            RestError::Conflict { message } => json!({ "error": message }),
            RestError::PayloadTooLarge => json!({ "error": "Payload too large" }),
            RestError::ServiceUnavailable { message } => {
                error!(error = %message, "Storage unavailable");
                json!({ "error": "Service unavailable" })
            }
            RestError::InternalError { message } => {
                error!(error = %message, "Request failed with internal error");
                json!({ "error": "Server error" })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(ResourceError::NotFound { .. }) => RestError::NotFound,
            StorageError::Resource(ResourceError::DuplicateEmail { .. }) => RestError::Conflict {
                message: "Email already exists".to_string(),
            },
            StorageError::Backend(e) => RestError::InternalError {
                message: e.to_string(),
            },
        }
    }
}

impl From<ValidationErrors> for RestError {
    fn from(errors: ValidationErrors) -> Self {
        RestError::BadRequest {
            message: errors.to_string(),
            issues: errors.into_issues(),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
