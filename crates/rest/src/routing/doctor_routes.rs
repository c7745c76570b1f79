//! Doctor route configuration.
//!
//! Defines all routes for the doctors API.

use axum::{Router, routing::get};
use clinic_persistence::core::DoctorStorage;

use crate::handlers;
use crate::state::AppState;

/// Creates all REST API routes.
///
/// # Routes
///
/// ## Probes
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe (pings storage)
///
/// ## Collection
/// - `GET /api/doctors` - List
/// - `POST /api/doctors` - Create
///
/// ## Instance
/// - `GET /api/doctors/{id}` - Read
/// - `PUT /api/doctors/{id}` - Partial update
/// - `DELETE /api/doctors/{id}` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: DoctorStorage + Send + Sync + 'static,
{
    Router::new()
        // Probes
        .route("/health", get(handlers::health_handler))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        // Collection routes
        .route(
            "/api/doctors",
            get(handlers::list_handler::<S>).post(handlers::create_handler::<S>),
        )
        // Instance routes
        .route(
            "/api/doctors/{id}",
            get(handlers::read_handler::<S>)
                .put(handlers::update_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        )
        // State
        .with_state(state)
}
