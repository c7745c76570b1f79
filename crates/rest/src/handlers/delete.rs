//! Delete handler.
//!
//! `DELETE /api/doctors/{id}`

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_persistence::core::DoctorStorage;
use tracing::{debug, info};

use crate::error::RestResult;
use crate::extractors::DoctorId;
use crate::state::AppState;

/// Handler for hard-deleting a doctor.
///
/// # Response
///
/// - `204 No Content` - The row was removed
/// - `404 Not Found` - No doctor has this id
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    DoctorId(id): DoctorId,
) -> RestResult<Response>
where
    S: DoctorStorage + Send + Sync,
{
    debug!(id, "Processing delete request");

    state.storage().delete(id).await?;

    info!(id, "Deleted doctor");

    Ok(StatusCode::NO_CONTENT.into_response())
}
