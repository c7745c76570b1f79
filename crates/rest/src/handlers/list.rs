//! List handler.
//!
//! `GET /api/doctors?page&pageSize&q&specialty&sortBy&sortDir`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_persistence::core::DoctorStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::ListParams;
use crate::responses::ListResponse;
use crate::state::AppState;

/// Handler for listing doctors.
///
/// # Response
///
/// - `200 OK` - `{"data": [...], "pagination": {"page", "pageSize", "total"}}`
/// - `400 Bad Request` - Invalid `page` or `pageSize`
///
/// A page past the end of the result set returns an empty `data` array.
pub async fn list_handler<S>(
    State(state): State<AppState<S>>,
    ListParams(filter): ListParams,
) -> RestResult<Response>
where
    S: DoctorStorage + Send + Sync,
{
    debug!(
        page = filter.page,
        page_size = filter.page_size,
        query = ?filter.query,
        specialty = ?filter.specialty,
        sort_by = %filter.sort_by,
        "Processing list request"
    );

    let page = state.storage().list(&filter).await?;

    debug!(
        returned = page.items.len(),
        total = page.total,
        "Returning doctor page"
    );

    Ok((StatusCode::OK, Json(ListResponse::new(page, &filter))).into_response())
}
