//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/`, `/about-me`, `/about-you`, `/projects/*`, ... - Pages (see [`crate::web::routes`])
//! - `GET /short/{code}`  - Short link redirect
//! - `GET /health`        - Health check
//! - `/assets/*`          - Static assets
//! - `/robots.txt`, `/sitemap.xml` - Served from the asset directory
//! - anything else        - `*.html` redirect or 404 page
//!
//! # Middleware
//!
//! - **Tracing** - Request spans with status and latency
//! - **Access log** - One combined-log-format line per request
//! - **Path normalization** - Trailing slash handling

use std::path::Path;

use crate::api::handlers::{health_handler, short_link_handler};
use crate::api::middleware::{access_log, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::handlers::fallback_handler;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Builds the router with all routes and middleware, without path normalization.
///
/// Paths must be given without trailing slashes.
pub fn site_router(state: AppState, assets_dir: &str) -> Router {
    let assets = Path::new(assets_dir);

    Router::new()
        .merge(web::routes::page_routes())
        .route("/short/{code}", get(short_link_handler))
        .route("/health", get(health_handler))
        .nest_service("/assets", ServeDir::new(assets))
        .route_service("/robots.txt", ServeFile::new(assets.join("robots.txt")))
        .route_service("/sitemap.xml", ServeFile::new(assets.join("sitemap.xml")))
        .fallback(fallback_handler)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            access_log::layer,
        ))
        .layer(tracing::layer())
        .with_state(state)
}

/// Constructs the application router.
///
/// Trailing slashes are trimmed before routing, so `/short/{code}/` and
/// `/short/{code}` are equivalent.
pub fn app_router(state: AppState, assets_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(site_router(state, assets_dir))
}
