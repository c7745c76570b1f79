//! Backend abstraction for database drivers.
//!
//! The [`Backend`] trait covers the lifecycle of a database driver: schema
//! bootstrap, health checks and teardown. Data access lives in
//! [`DoctorStorage`](super::DoctorStorage).

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::BackendError;

/// Identifies the type of database backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// SQLite database (file-based or in-memory).
    Sqlite,
    /// PostgreSQL database.
    Postgres,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Sqlite => write!(f, "sqlite"),
            BackendKind::Postgres => write!(f, "postgres"),
        }
    }
}

/// A database backend with a pooled connection lifecycle.
///
/// # Example
///
/// ```ignore
/// use clinic_persistence::core::Backend;
///
/// async fn bootstrap<B: Backend>(backend: &B) -> Result<(), BackendError> {
///     backend.initialize().await?;
///     backend.health_check().await
/// }
/// ```
#[async_trait]
pub trait Backend: Send + Sync + Debug {
    /// Returns the kind of backend.
    fn kind(&self) -> BackendKind;

    /// Returns a human-readable name for this backend.
    fn name(&self) -> &'static str;

    /// Checks if the backend is healthy and accepting connections.
    async fn health_check(&self) -> Result<(), BackendError>;

    /// Initializes the database schema if needed.
    async fn initialize(&self) -> Result<(), BackendError>;

    /// Closes the connection pool. Further operations fail.
    async fn shutdown(&self);
}
