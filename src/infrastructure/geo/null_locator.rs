//! No-op geo-IP implementation.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::visitor::GeoLocator;

/// A locator that never resolves anything.
///
/// Used when `GEOIP_ENABLED=false` and in tests that must not touch the network.
pub struct NullLocator;

impl NullLocator {
    pub fn new() -> Self {
        debug!("Using NullLocator (geo-IP disabled)");
        Self
    }
}

impl Default for NullLocator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeoLocator for NullLocator {
    async fn public_ip(&self) -> Option<String> {
        None
    }

    async fn locate(&self, _ip: &str) -> Option<String> {
        None
    }
}
