//! Tests for the operational endpoints.

mod common;

use axum::http::StatusCode;
use common::TestApp;

#[tokio::test]
async fn test_health_reports_version() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_ready_checks_database() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"][0]["name"], "database");
    assert_eq!(body["checks"][0]["status"], "healthy");
}

#[tokio::test]
async fn test_live() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/live").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "GoREST Proxy API");
    assert!(body["components"]["schemas"]["ToDo"].is_object());
}
