//! Clinic Doctor Directory Persistence Layer
//!
//! This crate stores and queries doctor records for the clinic API. It owns
//! the domain types, the parameterized SQL builder and the database backends.
//!
//! # Backend Features
//!
//! Enable backends with feature flags in `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! clinic-persistence = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! Available backend features:
//! - `sqlite` (default) - SQLite with in-memory and file modes
//! - `postgres` - PostgreSQL with a deadpool connection pool
//!
//! # Architecture
//!
//! - [`types`] - Doctor records, create/update payloads and list filters
//! - [`error`] - Error types for all operations
//! - [`core`] - Storage and backend lifecycle traits
//! - [`query`] - Dialect-aware SQL construction with bound parameters
//! - [`backends`] - Backend implementations (SQLite, PostgreSQL)
//!
//! # Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "sqlite")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use clinic_persistence::backends::sqlite::SqliteBackend;
//! use clinic_persistence::core::DoctorStorage;
//! use clinic_persistence::types::{ListFilter, NewDoctor};
//!
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! let doctor = backend
//!     .create(NewDoctor {
//!         name: "Ada Lovelace".to_string(),
//!         specialty: "Cardiology".to_string(),
//!         email: "ada@example.com".to_string(),
//!         phone: "555-0100".to_string(),
//!         is_active: None,
//!     })
//!     .await?;
//! assert!(doctor.is_active);
//!
//! let page = backend.list(&ListFilter::default().with_query("ada")).await?;
//! assert_eq!(page.total, 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod query;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult};
pub use types::{Doctor, DoctorChanges, ListFilter, NewDoctor, Page};

// Re-export core traits
pub use core::{Backend, BackendKind, DoctorStorage};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
