mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use personal_site::domain::visitor::GeoLocator;
use personal_site::infrastructure::persistence::MemoryLinkStore;
use personal_site::routes::app_router;
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn test_index_page() {
    let server = common::test_server(common::create_test_state().await);

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("Hello there"));
}

#[tokio::test]
async fn test_about_me_page() {
    let server = common::test_server(common::create_test_state().await);

    let response = server.get("/about-me").await;

    response.assert_status_ok();
    assert!(response.text().contains("About me"));
}

#[tokio::test]
async fn test_unfinished_pages() {
    let server = common::test_server(common::create_test_state().await);

    for path in [
        "/contact",
        "/me-rn",
        "/chat",
        "/projects/mlmp",
        "/projects/jball",
        "/projects/latin",
    ] {
        let response = server.get(path).await;
        response.assert_status_ok();
        assert!(
            response.text().contains("Under construction"),
            "{path} should render the unfinished page"
        );
    }
}

#[tokio::test]
async fn test_projects_index() {
    let server = common::test_server(common::create_test_state().await);

    let response = server.get("/projects").await;

    response.assert_status_ok();
    assert!(response.text().contains("/projects/mlmp/"));
}

#[tokio::test]
async fn test_account_stubs() {
    let server = common::test_server(common::create_test_state().await);

    server.get("/login").await.assert_status_ok();
    assert_eq!(server.get("/signup").await.text(), "Signup");
    assert_eq!(server.get("/logout").await.text(), "Logout");
}

#[tokio::test]
async fn test_unknown_path_renders_not_found() {
    let server = common::test_server(common::create_test_state().await);

    let response = server.get("/no/such/page").await;

    response.assert_status_not_found();
    assert!(response.text().contains("Not found"));
}

#[tokio::test]
async fn test_html_suffix_redirects() {
    let server = common::test_server(common::create_test_state().await);

    let response = server.get("/about-me.html").await;

    assert!(response.status_code().is_redirection());
    assert_eq!(response.header("location"), "/about-me/");
}

#[tokio::test]
async fn test_robots_and_assets_served() {
    let server = common::test_server(common::create_test_state().await);

    let robots = server.get("/robots.txt").await;
    robots.assert_status_ok();
    assert!(robots.text().contains("User-agent"));

    server.get("/sitemap.xml").await.assert_status_ok();
    server.get("/assets/css/site.css").await.assert_status_ok();
}

struct FixedLocator;

#[async_trait::async_trait]
impl GeoLocator for FixedLocator {
    async fn public_ip(&self) -> Option<String> {
        Some("203.0.113.7".to_string())
    }

    async fn locate(&self, ip: &str) -> Option<String> {
        (ip == "198.51.100.23").then(|| "Springfield, Oregon, United States".to_string())
    }
}

#[tokio::test]
async fn test_about_you_uses_forwarded_ip() {
    let state = common::create_test_state_with(
        Arc::new(MemoryLinkStore::new()),
        Arc::new(FixedLocator),
    );
    let server = common::test_server(state);

    let response = server
        .get("/about-you")
        .add_header("X-Forwarded-For", "198.51.100.23, 10.0.0.1")
        .add_header(
            "User-Agent",
            "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
        )
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("198.51.100.23"));
    assert!(body.contains("Firefox 121.0"));
    assert!(body.contains("Springfield, Oregon, United States"));
}

#[tokio::test]
async fn test_about_you_without_location() {
    let server = common::test_server(common::create_test_state().await);

    let response = server.get("/about-you").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Unknown"));
    assert!(!body.contains("Approximate location"));
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let state = common::create_test_state().await;
    let app = app_router(state, common::ASSETS_DIR);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/short/example/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://example.com"
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/about-me/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
