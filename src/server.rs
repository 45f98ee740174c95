//! HTTP server initialization and runtime setup.
//!
//! Opens the link store, prepares its schema and seed, builds the shared
//! state, and runs the Axum server until a shutdown signal arrives.

use crate::application::services::{ResolutionService, VisitorService};
use crate::config::Config;
use crate::domain::visitor::GeoLocator;
use crate::infrastructure::geo::{IpApiLocator, NullLocator};
use crate::infrastructure::persistence::open_store;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link store (PostgreSQL or in-memory)
/// - Schema and seed link
/// - Geo-IP locator
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be reached or prepared (the site never serves without it)
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = open_store(&config)
        .await
        .context("Failed to open link store")?;
    tracing::info!("Connected to link store ({})", store.backend());

    let resolution_service = Arc::new(ResolutionService::new(store));
    resolution_service
        .initialize()
        .await
        .context("Failed to initialize link store")?;

    let geo: Arc<dyn GeoLocator> = if config.geoip_enabled {
        Arc::new(IpApiLocator::new(
            &config.geoip_api_url,
            &config.public_ip_api_url,
        ))
    } else {
        Arc::new(NullLocator::new())
    };
    let visitor_service = Arc::new(VisitorService::new(geo));

    let state = AppState::new(
        resolution_service.clone(),
        visitor_service,
        config.behind_proxy,
    );

    let app = app_router(state, &config.assets_dir);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped, closing link store");
    resolution_service.shutdown().await;

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = sigterm => {}
    }

    tracing::info!("Shutdown signal received");
}
