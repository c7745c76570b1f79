//! Read handler.
//!
//! `GET /api/doctors/{id}`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_persistence::core::DoctorStorage;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::DoctorId;
use crate::state::AppState;

/// Handler for reading a doctor by id.
///
/// # Response
///
/// - `200 OK` - The doctor
/// - `404 Not Found` - No doctor has this id, or the id is not an integer
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    DoctorId(id): DoctorId,
) -> RestResult<Response>
where
    S: DoctorStorage + Send + Sync,
{
    debug!(id, "Processing read request");

    match state.storage().read(id).await? {
        Some(doctor) => Ok((StatusCode::OK, Json(doctor)).into_response()),
        None => {
            debug!(id, "Doctor not found");
            Err(RestError::NotFound)
        }
    }
}
