//! SQLite backend implementation.
//!
//! Supports both in-memory databases (great for testing) and file-based
//! databases (for development and small deployments).
//!
//! # Example
//!
//! ```no_run
//! use clinic_persistence::backends::sqlite::SqliteBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE doctors (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     name TEXT NOT NULL,
//!     specialty TEXT NOT NULL,
//!     email TEXT NOT NULL UNIQUE COLLATE NOCASE,
//!     phone TEXT NOT NULL,
//!     is_active INTEGER NOT NULL DEFAULT 1,
//!     created_at TEXT NOT NULL,  -- RFC 3339, microsecond precision, UTC
//!     updated_at TEXT NOT NULL
//! );
//! ```

mod backend;
mod schema;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
