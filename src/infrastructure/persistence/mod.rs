//! Link store implementations.
//!
//! - [`PgLinkStore`] - PostgreSQL (`postgres://`, `postgresql://`)
//! - [`MemoryLinkStore`] - process-local map (`memory://`)
//!
//! [`open_store`] picks the backend from the `DATABASE_URL` scheme.

pub mod memory_link_store;
pub mod pg_link_store;

pub use memory_link_store::MemoryLinkStore;
pub use pg_link_store::PgLinkStore;

use std::sync::Arc;

use crate::config::Config;
use crate::domain::repositories::LinkStore;
use crate::error::StoreError;

/// Opens the link store configured by `config.database_url`.
///
/// # Errors
///
/// Returns [`StoreError::Unavailable`] if the database cannot be reached and
/// [`StoreError::UnsupportedBackend`] for unknown URL schemes.
pub async fn open_store(config: &Config) -> Result<Arc<dyn LinkStore>, StoreError> {
    let url = config.database_url.as_str();

    if url.starts_with("postgres://") || url.starts_with("postgresql://") {
        Ok(Arc::new(PgLinkStore::connect(config).await?))
    } else if url.starts_with("memory://") {
        Ok(Arc::new(MemoryLinkStore::new()))
    } else {
        let scheme = url.split("://").next().unwrap_or(url);
        Err(StoreError::UnsupportedBackend(scheme.to_string()))
    }
}
