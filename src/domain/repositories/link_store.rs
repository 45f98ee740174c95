//! Storage contract for the short code to destination mapping.

use async_trait::async_trait;

use crate::domain::entities::{Registration, ShortLink};
use crate::error::StoreError;

/// Durable mapping from short code to destination URL.
///
/// Uniqueness of `code` is enforced by the backend itself, so concurrent
/// registrations of the same code cannot both succeed. Shared backends must
/// enforce it in storage; `MemoryLinkStore` is single-process only.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL with a unique constraint
/// - [`crate::infrastructure::persistence::MemoryLinkStore`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Creates the storage schema and the unique constraint on `code` if absent.
    ///
    /// Safe to call on every startup.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] or [`StoreError::Migration`] when the
    /// backend cannot be prepared.
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    /// Inserts a new short link atomically.
    ///
    /// # Returns
    ///
    /// - `Ok(Registration::Created)` if the link was stored
    /// - `Ok(Registration::Conflict)` if the code already exists; nothing is modified
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on backend failures.
    async fn register(&self, link: ShortLink) -> Result<Registration, StoreError>;

    /// Returns the destination stored for `code`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(destination))` if found
    /// - `Ok(None)` if no link has this code
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on backend failures.
    async fn lookup(&self, code: &str) -> Result<Option<String>, StoreError>;

    /// Verifies that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Releases backend resources. Best effort.
    async fn close(&self);

    /// Backend name used in logs and health output.
    fn backend(&self) -> &'static str;
}
