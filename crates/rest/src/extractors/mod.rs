//! Axum extractors for doctor requests.
//!
//! - [`JsonBody`] - Parse a request body into raw JSON for validation
//! - [`ListParams`] - Parse and validate list query parameters
//! - [`DoctorId`] - Parse the `:id` path segment

mod doctor_id;
mod json_body;
mod list_params;

pub use doctor_id::DoctorId;
pub use json_body::{JsonBody, JsonBodyRejection};
pub use list_params::ListParams;
