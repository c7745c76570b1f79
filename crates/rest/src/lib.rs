//! # clinic-rest - Doctors REST API
//!
//! This crate provides the HTTP surface of the clinic doctor directory: a small
//! CRUD API over a single `doctors` table, built on [axum](https://docs.rs/axum)
//! and backed by any [`DoctorStorage`] implementation from `clinic-persistence`.
//!
//! ## Features
//!
//! - **CRUD**: list, read, create, partial update and hard delete
//! - **Listing**: pagination, free-text search, specialty filter, allow-listed sorting
//! - **Validation**: every invalid field is reported in a single 400 response
//! - **Probes**: `/health`, `/_liveness` and `/_readiness`
//!
//! ## Backend Support
//!
//! Storage backends are configured through feature flags:
//!
//! - `sqlite` - SQLite backend (default)
//! - `postgres` - PostgreSQL backend
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use clinic_rest::{create_app, ServerConfig};
//! use clinic_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SqliteBackend::open("clinic.db")?;
//!     backend.init_schema()?;
//!
//!     let app = create_app(backend);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:4000").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern | Success |
//! |-----------|-------------|-------------|---------|
//! | list | GET | `/api/doctors?page&pageSize&q&specialty&sortBy&sortDir` | 200 |
//! | read | GET | `/api/doctors/{id}` | 200 |
//! | create | POST | `/api/doctors` | 201 |
//! | update | PUT | `/api/doctors/{id}` | 200 |
//! | delete | DELETE | `/api/doctors/{id}` | 204 |
//! | health | GET | `/health` | 200 |
//!
//! ## Error Handling
//!
//! Errors are returned as `{"error": "<message>"}`. Validation failures also
//! carry `"issues": [{"field", "message"}]`.
//!
//! | HTTP Status | Cause |
//! |-------------|-------|
//! | 400 | Invalid JSON, failed field rules, empty update |
//! | 404 | No doctor with this id |
//! | 408 | Request exceeded `REQUEST_TIMEOUT` |
//! | 409 | Email already exists |
//! | 413 | Body exceeded `MAX_BODY_SIZE` |
//! | 500 | Any other storage failure (details are logged, not returned) |
//!
//! ## Configuration
//!
//! See [`ServerConfig`] for the environment variables the server reads.
//!
//! ## Architecture
//!
//! - [`error`] - Error types and HTTP mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`validation`] - Field rules for bodies and list parameters
//! - [`extractors`] - Axum extractors for ids, bodies and list parameters
//! - [`handlers`] - HTTP request handlers for each operation
//! - [`responses`] - Response body shapes
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod state;
pub mod validation;

// Re-export commonly used types
pub use config::{ServerConfig, StorageBackendMode};
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, extract::DefaultBodyLimit, http::StatusCode};
use clinic_persistence::core::DoctorStorage;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
///
/// # Example
///
/// ```rust,ignore
/// use clinic_rest::create_app;
/// use clinic_persistence::backends::sqlite::SqliteBackend;
///
/// let backend = SqliteBackend::in_memory()?;
/// backend.init_schema()?;
/// let app = create_app(backend);
/// ```
pub fn create_app<S>(storage: S) -> Router
where
    S: DoctorStorage + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Builds the routes and wraps them in the middleware stack: request
/// tracing, a request timeout answering 408, the body size limit and,
/// when enabled, CORS.
///
/// # Example
///
/// ```rust,ignore
/// use clinic_rest::{create_app_with_config, ServerConfig};
/// use clinic_persistence::backends::sqlite::SqliteBackend;
///
/// let backend = SqliteBackend::in_memory()?;
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(backend, config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: DoctorStorage + Send + Sync + 'static,
{
    create_app_with_shared_storage(Arc::new(storage), config)
}

/// Creates the Axum application around storage the caller keeps a handle to.
///
/// The server binary uses this to shut the backend down after the listener
/// stops; tests use it to inspect storage directly.
pub fn create_app_with_shared_storage<S>(storage: Arc<S>, config: ServerConfig) -> Router
where
    S: DoctorStorage + Send + Sync + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        storage.backend_name()
    );

    let state = AppState::new(storage, config.clone());

    let router = routing::create_routes(state).layer(DefaultBodyLimit::max(config.max_body_size));

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
///
/// Methods and headers are always permissive; only origins are configurable.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins.trim() == "*" {
        return cors.allow_origin(Any);
    }

    let origins: Vec<http::HeaderValue> = config
        .cors_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect();
    cors.allow_origin(origins)
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG`, when set,
/// takes precedence over `level`.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "clinic_rest={level},clinic_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
