#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use std::sync::Arc;
use personal_site::application::services::{ResolutionService, VisitorService};
use personal_site::domain::repositories::LinkStore;
use personal_site::domain::visitor::GeoLocator;
use personal_site::infrastructure::geo::NullLocator;
use personal_site::infrastructure::persistence::MemoryLinkStore;
use personal_site::routes::site_router;
use personal_site::state::AppState;

pub const ASSETS_DIR: &str = "assets";

pub fn create_test_state_with(store: Arc<dyn LinkStore>, geo: Arc<dyn GeoLocator>) -> AppState {
    AppState::new(
        Arc::new(ResolutionService::new(store)),
        Arc::new(VisitorService::new(geo)),
        true,
    )
}

/// State over a fresh in-memory store, already initialized with the seed link.
pub async fn create_test_state() -> AppState {
    let state = create_test_state_with(
        Arc::new(MemoryLinkStore::new()),
        Arc::new(NullLocator::new()),
    );
    state.resolution_service.initialize().await.unwrap();
    state
}

pub async fn create_test_link(state: &AppState, code: &str, destination: &str) {
    let outcome = state
        .resolution_service
        .create(code, destination)
        .await
        .unwrap();
    assert!(outcome.is_created(), "test link '{code}' already exists");
}

pub fn test_router(state: AppState) -> Router {
    site_router(state, ASSETS_DIR)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(test_router(state)).unwrap()
}
