//! Short link creation and resolution service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::short_link::validate_code;
use crate::domain::entities::{Registration, ShortLink};
use crate::domain::repositories::LinkStore;
use crate::error::StoreError;

/// Code of the link registered at startup for smoke tests.
pub const SEED_CODE: &str = "example";

/// Destination of the seed link.
pub const SEED_DESTINATION: &str = "https://example.com";

/// Thin layer between the HTTP front and the [`LinkStore`].
///
/// Every call hits the store exactly once. Nothing is retried.
pub struct ResolutionService {
    store: Arc<dyn LinkStore>,
}

impl ResolutionService {
    /// Creates a service over an already opened store.
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// Prepares the store and registers the seed link.
    ///
    /// Running this again against the same backend is harmless: the seed
    /// comes back as [`Registration::Conflict`] and is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the store error if the schema cannot be created or the seed
    /// insert fails for any reason other than a duplicate.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        self.store.ensure_schema().await?;

        match self.create(SEED_CODE, SEED_DESTINATION).await? {
            Registration::Created => info!("Seeded short link '{}'", SEED_CODE),
            Registration::Conflict => debug!("Seed short link '{}' already present", SEED_CODE),
        }

        Ok(())
    }

    /// Returns the destination for `code`, or `None` if it is not registered.
    ///
    /// Codes that could never have been registered are reported as `None`
    /// without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the store cannot be queried.
    pub async fn resolve(&self, code: &str) -> Result<Option<String>, StoreError> {
        if validate_code(code).is_err() {
            debug!("Rejected malformed short code {:?}", code);
            return Ok(None);
        }

        self.store.lookup(code).await
    }

    /// Registers `code` to redirect to `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidLink`] if either value fails validation
    /// and [`StoreError::Unavailable`] on backend failures. A taken code is not
    /// an error: it yields `Ok(Registration::Conflict)`.
    pub async fn create(&self, code: &str, destination: &str) -> Result<Registration, StoreError> {
        let link = ShortLink::new(code, destination)?;
        self.store.register(link).await
    }

    /// Checks that the store answers.
    pub async fn health(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }

    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    /// Closes the store. Best effort.
    pub async fn shutdown(&self) {
        self.store.close().await;
    }
}
