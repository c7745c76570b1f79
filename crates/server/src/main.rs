//! Clinic doctors API server.
//!
//! Serves the doctors REST API over SQLite or PostgreSQL, chosen by the
//! scheme of `DATABASE_URL`.

use std::sync::Arc;

use clap::Parser;
use clinic_persistence::core::{Backend, DoctorStorage};
use clinic_rest::{ServerConfig, StorageBackendMode, create_app_with_shared_storage, init_logging};
use tracing::{error, info};

#[cfg(feature = "sqlite")]
use clinic_persistence::backends::sqlite::{SqliteBackend, SqliteBackendConfig};

/// Creates a SQLite backend from the server configuration.
#[cfg(feature = "sqlite")]
fn create_sqlite_backend(config: &ServerConfig) -> anyhow::Result<SqliteBackend> {
    let db_path = config.database_url.as_str();
    info!(database = %db_path, "Initializing SQLite backend");

    let backend_config = SqliteBackendConfig {
        max_connections: config.db_max_connections,
        ..Default::default()
    };

    Ok(SqliteBackend::with_config(db_path, backend_config)?)
}

/// Initializes the schema, serves until a shutdown signal, then releases
/// the backend's connections.
async fn run<B>(backend: B, config: ServerConfig) -> anyhow::Result<()>
where
    B: Backend + DoctorStorage + 'static,
{
    backend.initialize().await?;
    info!(backend = backend.name(), "Schema ready");

    let backend = Arc::new(backend);
    let app = create_app_with_shared_storage(Arc::clone(&backend), config.clone());

    let result = serve(app, &config).await;
    backend.shutdown().await;
    result
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let backend_mode = config.storage_mode();

    info!(
        port = config.port,
        host = %config.host,
        storage_backend = %backend_mode,
        "Starting clinic API server"
    );

    match backend_mode {
        StorageBackendMode::Sqlite => start_sqlite(config).await,
        StorageBackendMode::Postgres => start_postgres(config).await,
    }
}

/// Starts the server with the SQLite backend.
#[cfg(feature = "sqlite")]
async fn start_sqlite(config: ServerConfig) -> anyhow::Result<()> {
    let backend = create_sqlite_backend(&config)?;
    run(backend, config).await
}

/// Fallback when sqlite feature is not enabled.
#[cfg(not(feature = "sqlite"))]
async fn start_sqlite(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The sqlite backend requires the 'sqlite' feature. \
         Build with: cargo build -p clinic-server --features sqlite"
    )
}

/// Starts the server with the PostgreSQL backend.
#[cfg(feature = "postgres")]
async fn start_postgres(config: ServerConfig) -> anyhow::Result<()> {
    use clinic_persistence::backends::postgres::PostgresBackend;

    info!("Initializing PostgreSQL backend from connection string");
    let backend = PostgresBackend::with_max_connections(
        &config.database_url,
        config.db_max_connections as usize,
    )
    .await?;

    run(backend, config).await
}

/// Fallback when postgres feature is not enabled.
#[cfg(not(feature = "postgres"))]
async fn start_postgres(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The postgres backend requires the 'postgres' feature. \
         Build with: cargo build -p clinic-server --features postgres"
    )
}

#[cfg(not(any(feature = "sqlite", feature = "postgres")))]
compile_error!("At least one database backend feature must be enabled");
