//! Process-local link store for development and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Registration, ShortLink};
use crate::domain::repositories::LinkStore;
use crate::error::StoreError;

/// In-memory store selected with `DATABASE_URL=memory://`.
///
/// The existence check and the insert happen under one write lock, so the
/// insert is atomic within the process. Data does not survive a restart and
/// is not shared between processes.
#[derive(Default)]
pub struct MemoryLinkStore {
    links: RwLock<HashMap<String, String>>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        debug!("Using in-memory link store");
        Self::default()
    }

    /// Number of stored links.
    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.links.read().await.is_empty()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn register(&self, link: ShortLink) -> Result<Registration, StoreError> {
        let mut links = self.links.write().await;

        match links.entry(link.code) {
            Entry::Occupied(_) => Ok(Registration::Conflict),
            Entry::Vacant(slot) => {
                slot.insert(link.destination);
                Ok(Registration::Created)
            }
        }
    }

    async fn lookup(&self, code: &str) -> Result<Option<String>, StoreError> {
        Ok(self.links.read().await.get(code).cloned())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn close(&self) {}

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn link(code: &str, destination: &str) -> ShortLink {
        ShortLink::new(code, destination).unwrap()
    }

    #[tokio::test]
    async fn test_register_then_lookup() {
        let store = MemoryLinkStore::new();

        let outcome = store
            .register(link("abc123", "https://example.org/page"))
            .await
            .unwrap();

        assert_eq!(outcome, Registration::Created);
        assert_eq!(
            store.lookup("abc123").await.unwrap().as_deref(),
            Some("https://example.org/page")
        );
    }

    #[tokio::test]
    async fn test_duplicate_does_not_overwrite() {
        let store = MemoryLinkStore::new();
        store
            .register(link("abc123", "https://example.org/page"))
            .await
            .unwrap();

        let outcome = store
            .register(link("abc123", "https://other.org"))
            .await
            .unwrap();

        assert_eq!(outcome, Registration::Conflict);
        assert_eq!(
            store.lookup("abc123").await.unwrap().as_deref(),
            Some("https://example.org/page")
        );
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_lookup_missing() {
        let store = MemoryLinkStore::new();
        assert!(store.lookup("doesnotexist").await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_concurrent_registration_single_winner() {
        let store = Arc::new(MemoryLinkStore::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .register(link("race", &format!("https://example.com/{i}")))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_created() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(store.len().await, 1);
    }
}
