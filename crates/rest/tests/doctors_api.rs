//! Doctors API integration tests.
//!
//! Exercises every endpoint end to end over an in-memory SQLite backend:
//! - Status codes (200, 201, 204, 400, 404, 409)
//! - Response shapes for entities, pages and errors
//! - Pagination, filtering and sorting
//! - Partial update semantics

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use clinic_persistence::core::DoctorStorage;
use clinic_persistence::types::ListFilter;
use serde_json::{Value, json};

use common::{create_test_server, doctor_body, seed_doctor};

fn timestamp(value: &Value) -> DateTime<Utc> {
    value
        .as_str()
        .expect("timestamp is a string")
        .parse()
        .expect("timestamp is RFC 3339")
}

fn names(page: &Value) -> Vec<String> {
    page["data"]
        .as_array()
        .expect("data is an array")
        .iter()
        .map(|d| d["name"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Health Tests
// =============================================================================

#[tokio::test]
async fn test_health() {
    let (server, _) = create_test_server().await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "ok": true }));
}

// =============================================================================
// Create Tests
// =============================================================================

#[tokio::test]
async fn test_create_returns_201_with_entity() {
    let (server, _) = create_test_server().await;

    let response = server
        .post("/api/doctors")
        .json(&doctor_body("Ada Lovelace", "Cardiology"))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["name"], "Ada Lovelace");
    assert_eq!(body["specialty"], "Cardiology");
    assert_eq!(body["email"], "ada.lovelace@clinic.example");
    assert_eq!(body["phone"], "555-0100");
    assert_eq!(body["is_active"], true);
    assert_eq!(body["created_at"], body["updated_at"]);
}

#[tokio::test]
async fn test_create_respects_is_active() {
    let (server, _) = create_test_server().await;

    let mut body = doctor_body("Grace Hopper", "Neurology");
    body["is_active"] = json!(false);

    let response = server.post("/api/doctors").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["is_active"], false);
}

#[tokio::test]
async fn test_create_ignores_unknown_and_server_fields() {
    let (server, _) = create_test_server().await;

    let mut body = doctor_body("Alan Turing", "Oncology");
    body["id"] = json!(12345);
    body["created_at"] = json!("1999-01-01T00:00:00Z");
    body["nickname"] = json!("Prof");

    let response = server.post("/api/doctors").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert_ne!(created["id"], 12345);
    assert!(created.get("nickname").is_none());
    assert!(timestamp(&created["created_at"]).timestamp() > 946_684_800);
}

#[tokio::test]
async fn test_create_then_get_is_identical() {
    let (server, _) = create_test_server().await;

    let created = seed_doctor(&server, "Ada Lovelace", "Cardiology").await;
    let id = created["id"].as_i64().unwrap();

    let response = server.get(&format!("/api/doctors/{}", id)).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), created);
}

#[tokio::test]
async fn test_create_duplicate_email_conflicts() {
    let (server, backend) = create_test_server().await;

    let body = doctor_body("Ada Lovelace", "Cardiology");
    server
        .post("/api/doctors")
        .json(&body)
        .await
        .assert_status(StatusCode::CREATED);

    let mut duplicate = doctor_body("Ada King", "Surgery");
    duplicate["email"] = json!("ADA.LOVELACE@clinic.example");
    let response = server.post("/api/doctors").json(&duplicate).await;

    response.assert_status(StatusCode::CONFLICT);
    response.assert_json(&json!({ "error": "Email already exists" }));

    let page = backend.list(&ListFilter::default()).await.unwrap();
    assert_eq!(page.total, 1);
}

#[tokio::test]
async fn test_create_reports_all_issues() {
    let (server, backend) = create_test_server().await;

    let response = server
        .post("/api/doctors")
        .json(&json!({
            "name": "A",
            "email": "not-an-email",
            "phone": 5550100,
            "is_active": "yes"
        }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    let fields: Vec<&str> = body["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "specialty", "email", "phone", "is_active"]);
    assert!(body["error"].as_str().unwrap().starts_with("name: "));

    let page = backend.list(&ListFilter::default()).await.unwrap();
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_create_rejects_null_fields() {
    let (server, _) = create_test_server().await;

    let mut body = doctor_body("Ada Lovelace", "Cardiology");
    body["specialty"] = Value::Null;

    let response = server.post("/api/doctors").json(&body).await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["issues"][0]["field"], "specialty");
    assert_eq!(body["issues"][0]["message"], "Expected string");
}

#[tokio::test]
async fn test_create_invalid_json() {
    let (server, _) = create_test_server().await;

    let response = server.post("/api/doctors").text("{\"name\": ").await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));
}

#[tokio::test]
async fn test_create_non_object_body() {
    let (server, _) = create_test_server().await;

    let response = server.post("/api/doctors").json(&json!([1, 2, 3])).await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["issues"][0]["field"], "body");
}

// =============================================================================
// Read Tests
// =============================================================================

#[tokio::test]
async fn test_read_missing_returns_404() {
    let (server, _) = create_test_server().await;

    let response = server.get("/api/doctors/9999").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "error": "Not found" }));
}

#[tokio::test]
async fn test_read_non_numeric_id_returns_404() {
    let (server, _) = create_test_server().await;
    seed_doctor(&server, "Ada Lovelace", "Cardiology").await;

    server.get("/api/doctors/abc").await.assert_status_not_found();
    server.get("/api/doctors/1.5").await.assert_status_not_found();
}

// =============================================================================
// Update Tests
// =============================================================================

#[tokio::test]
async fn test_update_single_field() {
    let (server, _) = create_test_server().await;

    let created = seed_doctor(&server, "Ada Lovelace", "Cardiology").await;
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/api/doctors/{}", id))
        .json(&json!({ "phone": "555-0199" }))
        .await;

    response.assert_status_ok();
    let updated: Value = response.json();
    assert_eq!(updated["phone"], "555-0199");
    for field in ["id", "name", "specialty", "email", "is_active", "created_at"] {
        assert_eq!(updated[field], created[field], "{} changed", field);
    }
    assert!(timestamp(&updated["updated_at"]) >= timestamp(&created["updated_at"]));
    assert!(timestamp(&updated["updated_at"]) >= timestamp(&updated["created_at"]));

    let fetched: Value = server.get(&format!("/api/doctors/{}", id)).await.json();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_empty_body_is_rejected_without_mutation() {
    let (server, _) = create_test_server().await;

    let created = seed_doctor(&server, "Ada Lovelace", "Cardiology").await;
    let path = format!("/api/doctors/{}", created["id"]);

    let response = server.put(&path).json(&json!({})).await;
    response.assert_status_bad_request();
    response.assert_json(&json!({ "error": "No fields to update" }));

    // No body at all reads as an empty object
    server.put(&path).await.assert_status_bad_request();

    // Only unknown keys
    server
        .put(&path)
        .json(&json!({ "nickname": "Countess" }))
        .await
        .assert_status_bad_request();

    let fetched: Value = server.get(&path).await.json();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_update_empty_body_on_missing_id_is_400() {
    let (server, _) = create_test_server().await;

    let response = server.put("/api/doctors/9999").json(&json!({})).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_update_missing_returns_404() {
    let (server, _) = create_test_server().await;

    let response = server
        .put("/api/doctors/9999")
        .json(&json!({ "name": "Nobody" }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_update_validation_failure() {
    let (server, _) = create_test_server().await;

    let created = seed_doctor(&server, "Ada Lovelace", "Cardiology").await;

    let response = server
        .put(&format!("/api/doctors/{}", created["id"]))
        .json(&json!({ "email": "nope", "name": "Ada Byron" }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["issues"].as_array().unwrap().len(), 1);
    assert_eq!(body["issues"][0]["field"], "email");
    assert_eq!(body["error"], "email: Invalid email");

    // Validation failed, so the valid name change was not applied either
    let fetched: Value = server
        .get(&format!("/api/doctors/{}", created["id"]))
        .await
        .json();
    assert_eq!(fetched["name"], "Ada Lovelace");
}

#[tokio::test]
async fn test_update_duplicate_email_conflicts() {
    let (server, _) = create_test_server().await;

    seed_doctor(&server, "Ada Lovelace", "Cardiology").await;
    let grace = seed_doctor(&server, "Grace Hopper", "Neurology").await;

    let response = server
        .put(&format!("/api/doctors/{}", grace["id"]))
        .json(&json!({ "email": "ada.lovelace@clinic.example" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_update_own_email_is_not_a_conflict() {
    let (server, _) = create_test_server().await;

    let ada = seed_doctor(&server, "Ada Lovelace", "Cardiology").await;

    let response = server
        .put(&format!("/api/doctors/{}", ada["id"]))
        .json(&json!({ "email": ada["email"], "is_active": false }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["is_active"], false);
}

// =============================================================================
// Delete Tests
// =============================================================================

#[tokio::test]
async fn test_delete_twice() {
    let (server, _) = create_test_server().await;

    let created = seed_doctor(&server, "Ada Lovelace", "Cardiology").await;
    let path = format!("/api/doctors/{}", created["id"]);

    let response = server.delete(&path).await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.as_bytes().is_empty());

    server.delete(&path).await.assert_status_not_found();
    server.get(&path).await.assert_status_not_found();
}

#[tokio::test]
async fn test_ids_are_not_reused() {
    let (server, _) = create_test_server().await;

    let first = seed_doctor(&server, "Ada Lovelace", "Cardiology").await;
    server
        .delete(&format!("/api/doctors/{}", first["id"]))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let second = seed_doctor(&server, "Grace Hopper", "Neurology").await;

    assert!(second["id"].as_i64().unwrap() > first["id"].as_i64().unwrap());
}

// =============================================================================
// List Tests
// =============================================================================

#[tokio::test]
async fn test_list_empty() {
    let (server, _) = create_test_server().await;

    let response = server.get("/api/doctors").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "data": [],
        "pagination": { "page": 1, "pageSize": 10, "total": 0 }
    }));
}

#[tokio::test]
async fn test_list_pagination_total_is_independent_of_paging() {
    let (server, _) = create_test_server().await;

    for i in 0..7 {
        seed_doctor(&server, &format!("Doctor {}", i), "Cardiology").await;
    }

    let response = server
        .get("/api/doctors")
        .add_query_param("page", 2)
        .add_query_param("pageSize", 3)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(
        body["pagination"],
        json!({ "page": 2, "pageSize": 3, "total": 7 })
    );

    let last: Value = server
        .get("/api/doctors")
        .add_query_param("page", 3)
        .add_query_param("pageSize", 3)
        .await
        .json();
    assert_eq!(last["data"].as_array().unwrap().len(), 1);
    assert_eq!(last["pagination"]["total"], 7);
}

#[tokio::test]
async fn test_list_page_past_end_is_empty() {
    let (server, _) = create_test_server().await;

    seed_doctor(&server, "Ada Lovelace", "Cardiology").await;
    seed_doctor(&server, "Grace Hopper", "Neurology").await;

    let response = server
        .get("/api/doctors")
        .add_query_param("page", 5)
        .add_query_param("pageSize", 10)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["pagination"]["total"], 2);
}

#[tokio::test]
async fn test_list_very_large_page_is_empty() {
    let (server, _) = create_test_server().await;

    seed_doctor(&server, "Ada Lovelace", "Cardiology").await;

    let response = server.get("/api/doctors?page=5000000000").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["pagination"]["page"], 5_000_000_000_u64);
    assert_eq!(body["pagination"]["total"], 1);
}

#[tokio::test]
async fn test_list_sort_by_name_ascending() {
    let (server, _) = create_test_server().await;

    for name in ["Mary Walker", "Ada Lovelace", "Zoe Quinn", "Grace Hopper"] {
        seed_doctor(&server, name, "Cardiology").await;
    }

    let body: Value = server
        .get("/api/doctors?sortBy=name&sortDir=asc")
        .await
        .json();

    let names = names(&body);
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert_eq!(names[0], "Ada Lovelace");
}

#[tokio::test]
async fn test_list_unknown_sort_falls_back_to_newest_first() {
    let (server, _) = create_test_server().await;

    for name in ["First Doctor", "Second Doctor", "Third Doctor"] {
        seed_doctor(&server, name, "Cardiology").await;
    }

    let response = server
        .get("/api/doctors?sortBy=password&sortDir=sideways")
        .await;

    response.assert_status_ok();
    assert_eq!(
        names(&response.json()),
        vec!["Third Doctor", "Second Doctor", "First Doctor"]
    );
}

#[tokio::test]
async fn test_list_filters() {
    let (server, _) = create_test_server().await;

    seed_doctor(&server, "Ada Lovelace", "Cardiology").await;
    seed_doctor(&server, "Grace Hopper", "Neurology").await;
    seed_doctor(&server, "Adam Smith", "Neurology").await;

    let by_query: Value = server
        .get("/api/doctors")
        .add_query_param("q", "  ada ")
        .add_query_param("sortBy", "name")
        .add_query_param("sortDir", "asc")
        .await
        .json();
    assert_eq!(names(&by_query), vec!["Ada Lovelace", "Adam Smith"]);
    assert_eq!(by_query["pagination"]["total"], 2);

    let by_specialty: Value = server
        .get("/api/doctors")
        .add_query_param("specialty", "Neurology")
        .add_query_param("q", "ada")
        .await
        .json();
    assert_eq!(names(&by_specialty), vec!["Adam Smith"]);

    // Matches against email too
    let by_email: Value = server
        .get("/api/doctors")
        .add_query_param("q", "hopper@clinic")
        .await
        .json();
    assert_eq!(names(&by_email), vec!["Grace Hopper"]);
}

#[tokio::test]
async fn test_list_query_wildcards_are_literal() {
    let (server, _) = create_test_server().await;

    seed_doctor(&server, "Ada Lovelace", "Cardiology").await;

    let body: Value = server
        .get("/api/doctors")
        .add_query_param("q", "%")
        .await
        .json();

    assert_eq!(body["pagination"]["total"], 0);
}

#[tokio::test]
async fn test_list_blank_filters_are_ignored() {
    let (server, _) = create_test_server().await;

    seed_doctor(&server, "Ada Lovelace", "Cardiology").await;

    let body: Value = server.get("/api/doctors?q=%20%20&specialty=").await.json();

    assert_eq!(body["pagination"]["total"], 1);
}

#[tokio::test]
async fn test_list_invalid_paging_parameters() {
    let (server, _) = create_test_server().await;

    for query in [
        "page=0",
        "page=abc",
        "page=1.5",
        "pageSize=0",
        "pageSize=101",
        "pageSize=-3",
    ] {
        let response = server.get(&format!("/api/doctors?{}", query)).await;
        response.assert_status_bad_request();
        let body: Value = response.json();
        assert!(!body["issues"].as_array().unwrap().is_empty(), "{}", query);
    }

    let response = server.get("/api/doctors?page=0&pageSize=500").await;
    let body: Value = response.json();
    assert_eq!(body["issues"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_max_page_size_accepted() {
    let (server, _) = create_test_server().await;

    let response = server.get("/api/doctors?pageSize=100").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["pagination"]["pageSize"], 100);
}

// =============================================================================
// File-backed Storage Tests
// =============================================================================

#[tokio::test]
async fn test_file_backed_database_survives_restart() {
    use std::sync::Arc;

    use axum_test::TestServer;
    use clinic_persistence::backends::sqlite::SqliteBackend;
    use clinic_rest::{ServerConfig, create_app_with_shared_storage};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clinic.db");

    let id = {
        let backend = SqliteBackend::open(&path).unwrap();
        backend.init_schema().unwrap();
        let app = create_app_with_shared_storage(Arc::new(backend), ServerConfig::for_testing());
        let server = TestServer::new(app).unwrap();
        seed_doctor(&server, "Ada Lovelace", "Cardiology").await["id"].clone()
    };

    let backend = SqliteBackend::open(&path).unwrap();
    backend.init_schema().unwrap();
    let app = create_app_with_shared_storage(Arc::new(backend), ServerConfig::for_testing());
    let server = TestServer::new(app).unwrap();

    let response = server.get(&format!("/api/doctors/{}", id)).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["name"], "Ada Lovelace");
}

// =============================================================================
// Storage Failure Tests
// =============================================================================

#[tokio::test]
async fn test_storage_failures_are_masked() {
    use axum_test::TestServer;
    use clinic_rest::{ServerConfig, create_app_with_config};
    use common::FailingStorage;

    let app = create_app_with_config(FailingStorage, ServerConfig::for_testing());
    let server = TestServer::new(app).unwrap();
    let masked = json!({ "error": "Server error" });

    let response = server.get("/api/doctors/1").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&masked);
    assert!(!response.text().contains("disk I/O"));

    let response = server
        .post("/api/doctors")
        .json(&doctor_body("Ada Lovelace", "Cardiology"))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&masked);

    let response = server.delete("/api/doctors/1").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&masked);

    let response = server
        .put("/api/doctors/1")
        .json(&json!({ "phone": "555-0199" }))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&masked);

    let response = server.get("/api/doctors").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&masked);
}

#[tokio::test]
async fn test_validation_runs_before_failing_storage() {
    use axum_test::TestServer;
    use clinic_rest::{ServerConfig, create_app_with_config};
    use common::FailingStorage;

    let app = create_app_with_config(FailingStorage, ServerConfig::for_testing());
    let server = TestServer::new(app).unwrap();

    server
        .post("/api/doctors")
        .json(&json!({}))
        .await
        .assert_status_bad_request();
    server
        .put("/api/doctors/1")
        .json(&json!({}))
        .await
        .assert_status_bad_request();
}
