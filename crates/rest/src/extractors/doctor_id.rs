//! Doctor id path extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::RestError;

/// Axum extractor for the `:id` path segment.
///
/// An id that is not an integer can never match a row, so it is rejected
/// as not found rather than as a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoctorId(pub i64);

impl DoctorId {
    /// Parses a raw path segment.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse::<i64>().ok().map(DoctorId)
    }
}

impl<S> FromRequestParts<S> for DoctorId
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| RestError::NotFound)?;

        DoctorId::parse(&raw).ok_or(RestError::NotFound)
    }
}
