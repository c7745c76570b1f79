//! Create handler.
//!
//! `POST /api/doctors`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_persistence::core::DoctorStorage;
use tracing::{debug, info};

use crate::error::RestResult;
use crate::extractors::JsonBody;
use crate::state::AppState;
use crate::validation::validate_create;

/// Handler for creating a doctor.
///
/// The body is validated in full before storage is touched. Unknown keys are
/// ignored; `is_active` defaults to `true`.
///
/// # Response
///
/// - `201 Created` - The stored doctor, including its generated id
/// - `400 Bad Request` - Invalid JSON or failed field rules
/// - `409 Conflict` - Another doctor already uses this email
/// - `413 Payload Too Large` - Body exceeds `MAX_BODY_SIZE`
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    JsonBody(body): JsonBody,
) -> RestResult<Response>
where
    S: DoctorStorage + Send + Sync,
{
    debug!("Processing create request");

    let new_doctor = validate_create(&body)?;
    let doctor = state.storage().create(new_doctor).await?;

    info!(id = doctor.id, "Created doctor");

    Ok((StatusCode::CREATED, Json(doctor)).into_response())
}
