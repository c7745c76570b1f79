//! HTTP request handlers.
//!
//! - [`list`] - Paginated, filtered listing
//! - [`read`] - Read a doctor by id
//! - [`create`] - Create a doctor
//! - [`update`] - Partially update a doctor
//! - [`delete`] - Delete a doctor
//! - [`health`] - Health, liveness and readiness probes

pub mod create;
pub mod delete;
pub mod health;
pub mod list;
pub mod read;
pub mod update;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use list::list_handler;
pub use read::read_handler;
pub use update::update_handler;
