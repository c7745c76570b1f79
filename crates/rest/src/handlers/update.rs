//! Update handler.
//!
//! `PUT /api/doctors/{id}` with a partial body.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_persistence::core::DoctorStorage;
use tracing::{debug, info};

use crate::error::{RestError, RestResult};
use crate::extractors::{DoctorId, JsonBody};
use crate::state::AppState;
use crate::validation::validate_update;

/// Handler for partially updating a doctor.
///
/// Only supplied fields change. A body with no recognised fields is rejected
/// without touching storage.
///
/// # Response
///
/// - `200 OK` - The stored doctor after the update
/// - `400 Bad Request` - No fields to update, or failed field rules
/// - `404 Not Found` - No doctor has this id
/// - `409 Conflict` - Another doctor already uses the new email
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    DoctorId(id): DoctorId,
    JsonBody(body): JsonBody,
) -> RestResult<Response>
where
    S: DoctorStorage + Send + Sync,
{
    debug!(id, "Processing update request");

    let changes = validate_update(&body)?;
    if changes.is_empty() {
        return Err(RestError::bad_request("No fields to update"));
    }

    let fields = changes.field_count();
    let doctor = state.storage().update(id, changes).await?;

    info!(id, fields, "Updated doctor");

    Ok((StatusCode::OK, Json(doctor)).into_response())
}
