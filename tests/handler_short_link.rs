mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use personal_site::domain::entities::{Registration, ShortLink};
use personal_site::domain::repositories::LinkStore;
use personal_site::infrastructure::geo::NullLocator;
use personal_site::StoreError;
use std::sync::Arc;

#[tokio::test]
async fn test_redirect_success() {
    let state = common::create_test_state().await;
    common::create_test_link(&state, "abc123", "https://example.org/page").await;
    let server = common::test_server(state);

    let response = server.get("/short/abc123").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.org/page");
}

#[tokio::test]
async fn test_redirect_seed_link() {
    let server = common::test_server(common::create_test_state().await);

    let response = server.get("/short/example").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_redirect_relative_destination() {
    let state = common::create_test_state().await;
    common::create_test_link(&state, "me", "/about-me/").await;
    let server = common::test_server(state);

    let response = server.get("/short/me").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "/about-me/");
}

#[tokio::test]
async fn test_redirect_not_found_renders_page() {
    let server = common::test_server(common::create_test_state().await);

    let response = server.get("/short/doesnotexist").await;

    response.assert_status_not_found();
    assert!(response.text().contains("Not found"));
}

#[tokio::test]
async fn test_redirect_malformed_code_is_not_found() {
    let server = common::test_server(common::create_test_state().await);

    let response = server.get("/short/bad%20code").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_conflict_keeps_original_destination() {
    let state = common::create_test_state().await;
    common::create_test_link(&state, "abc123", "https://example.org/page").await;

    let outcome = state
        .resolution_service
        .create("abc123", "https://other.org")
        .await
        .unwrap();
    assert_eq!(outcome, Registration::Conflict);

    let server = common::test_server(state);
    let response = server.get("/short/abc123").await;

    assert_eq!(response.header("location"), "https://example.org/page");
}

/// A store whose backend is down.
struct UnavailableStore;

#[async_trait]
impl LinkStore for UnavailableStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable(sqlx::Error::PoolClosed))
    }

    async fn register(&self, _link: ShortLink) -> Result<Registration, StoreError> {
        Err(StoreError::Unavailable(sqlx::Error::PoolClosed))
    }

    async fn lookup(&self, _code: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable(sqlx::Error::PoolClosed))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable(sqlx::Error::PoolClosed))
    }

    async fn close(&self) {}

    fn backend(&self) -> &'static str {
        "unavailable"
    }
}

#[tokio::test]
async fn test_store_failure_hides_details() {
    let state = common::create_test_state_with(
        Arc::new(UnavailableStore),
        Arc::new(NullLocator::new()),
    );
    let server = common::test_server(state);

    let response = server.get("/short/abc123").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.text();
    assert!(body.contains("Something went wrong"));
    assert!(!body.contains("pool"));
}

#[tokio::test]
async fn test_health_reports_store_failure() {
    let state = common::create_test_state_with(
        Arc::new(UnavailableStore),
        Arc::new(NullLocator::new()),
    );
    let server = common::test_server(state);

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_health_ok() {
    let server = common::test_server(common::create_test_state().await);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["store"]["status"], "ok");
}
