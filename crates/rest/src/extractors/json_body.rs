//! JSON body extractor.
//!
//! Reads the request body as untyped JSON so field rules can report every
//! problem, instead of failing on the first serde error.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::error::RestError;

/// Axum extractor for an untyped JSON request body.
///
/// An empty body is read as `{}`.
///
/// # Example
///
/// ```rust,ignore
/// use clinic_rest::extractors::JsonBody;
///
/// async fn create_handler(JsonBody(body): JsonBody) {
///     println!("name: {}", body["name"]);
/// }
/// ```
#[derive(Debug)]
pub struct JsonBody(pub Value);

/// Error type for body extraction failures.
#[derive(Debug)]
pub enum JsonBodyRejection {
    /// The body could not be read.
    Unreadable(String),
    /// The body exceeded the configured size limit.
    TooLarge,
    /// JSON parsing failed.
    InvalidJson(String),
}

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        let error = match self {
            JsonBodyRejection::Unreadable(msg) => {
                RestError::bad_request(format!("Unreadable body: {}", msg))
            }
            JsonBodyRejection::TooLarge => RestError::PayloadTooLarge,
            JsonBodyRejection::InvalidJson(msg) => {
                RestError::bad_request(format!("Invalid JSON: {}", msg))
            }
        };
        error.into_response()
    }
}

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                JsonBodyRejection::TooLarge
            } else {
                JsonBodyRejection::Unreadable(e.body_text())
            }
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(Value::Object(Default::default())));
        }

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| JsonBodyRejection::InvalidJson(e.to_string()))
    }
}
