//! Shared setup for REST API integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use clinic_persistence::backends::sqlite::SqliteBackend;
use clinic_persistence::core::DoctorStorage;
use clinic_persistence::error::{BackendError, StorageError, StorageResult};
use clinic_persistence::types::{Doctor, DoctorChanges, ListFilter, NewDoctor, Page};
use clinic_rest::{ServerConfig, create_app_with_shared_storage};
use serde_json::{Value, json};

/// Creates a test server over a fresh in-memory SQLite backend.
pub async fn create_test_server() -> (TestServer, Arc<SqliteBackend>) {
    create_test_server_with_config(ServerConfig::for_testing()).await
}

/// Creates a test server with a custom configuration.
pub async fn create_test_server_with_config(
    config: ServerConfig,
) -> (TestServer, Arc<SqliteBackend>) {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to init schema");
    let backend = Arc::new(backend);

    let app = create_app_with_shared_storage(Arc::clone(&backend), config);
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, backend)
}

/// Builds a valid create body; the email is derived from the name.
pub fn doctor_body(name: &str, specialty: &str) -> Value {
    json!({
        "name": name,
        "specialty": specialty,
        "email": format!("{}@clinic.example", name.to_lowercase().replace(' ', ".")),
        "phone": "555-0100"
    })
}

/// Creates a doctor through the API and returns the response body.
pub async fn seed_doctor(server: &TestServer, name: &str, specialty: &str) -> Value {
    let response = server
        .post("/api/doctors")
        .json(&doctor_body(name, specialty))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

/// Storage whose every call fails with a backend error.
pub struct FailingStorage;

impl FailingStorage {
    fn error() -> StorageError {
        StorageError::Backend(BackendError::Internal {
            backend_name: "failing".to_string(),
            message: "disk I/O error at /var/lib/clinic/clinic.db".to_string(),
            source: None,
        })
    }
}

#[async_trait]
impl DoctorStorage for FailingStorage {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    async fn list(&self, _filter: &ListFilter) -> StorageResult<Page<Doctor>> {
        Err(Self::error())
    }

    async fn read(&self, _id: i64) -> StorageResult<Option<Doctor>> {
        Err(Self::error())
    }

    async fn create(&self, _doctor: NewDoctor) -> StorageResult<Doctor> {
        Err(Self::error())
    }

    async fn update(&self, _id: i64, _changes: DoctorChanges) -> StorageResult<Doctor> {
        Err(Self::error())
    }

    async fn delete(&self, _id: i64) -> StorageResult<()> {
        Err(Self::error())
    }

    async fn ping(&self) -> StorageResult<()> {
        Err(Self::error())
    }
}

/// Storage that answers list and read calls after `delay`.
pub struct SlowStorage {
    pub delay: Duration,
}

#[async_trait]
impl DoctorStorage for SlowStorage {
    fn backend_name(&self) -> &'static str {
        "slow"
    }

    async fn list(&self, _filter: &ListFilter) -> StorageResult<Page<Doctor>> {
        tokio::time::sleep(self.delay).await;
        Ok(Page::new(Vec::new(), 0))
    }

    async fn read(&self, _id: i64) -> StorageResult<Option<Doctor>> {
        tokio::time::sleep(self.delay).await;
        Ok(None)
    }

    async fn create(&self, _doctor: NewDoctor) -> StorageResult<Doctor> {
        unimplemented!()
    }

    async fn update(&self, _id: i64, _changes: DoctorChanges) -> StorageResult<Doctor> {
        unimplemented!()
    }

    async fn delete(&self, _id: i64) -> StorageResult<()> {
        unimplemented!()
    }

    async fn ping(&self) -> StorageResult<()> {
        Ok(())
    }
}
