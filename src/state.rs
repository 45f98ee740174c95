//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{ResolutionService, VisitorService};

/// State shared by all request handlers.
///
/// Built once during bootstrap and cloned per request; the services inside
/// are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub resolution_service: Arc<ResolutionService>,
    pub visitor_service: Arc<VisitorService>,
    /// Whether `X-Forwarded-*` headers are trusted.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(
        resolution_service: Arc<ResolutionService>,
        visitor_service: Arc<VisitorService>,
        behind_proxy: bool,
    ) -> Self {
        Self {
            resolution_service,
            visitor_service,
            behind_proxy,
        }
    }
}
