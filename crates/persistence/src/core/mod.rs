//! Core storage traits and abstractions.
//!
//! - [`Backend`] - Database driver lifecycle (schema bootstrap, health, teardown)
//! - [`DoctorStorage`] - CRUD and listing over the doctors table

mod backend;
mod storage;

pub use backend::{Backend, BackendKind};
pub use storage::DoctorStorage;
