//! List query parameter extractor.

use std::collections::HashMap;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use clinic_persistence::types::ListFilter;

use crate::error::RestError;
use crate::validation::parse_list_query;

/// Axum extractor for validated list parameters.
///
/// Rejects with a 400 listing every invalid parameter.
#[derive(Debug, Clone)]
pub struct ListParams(pub ListFilter);

impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                RestError::bad_request(format!("Invalid query string: {}", e.body_text()))
            })?;

        Ok(ListParams(parse_list_query(&params)?))
    }
}
