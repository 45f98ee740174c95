//! Geo-IP lookups for the "about you" page.
//!
//! - [`IpApiLocator`] - HTTP lookups against ip-api.com style endpoints
//! - [`NullLocator`] - no-op implementation used when lookups are disabled

pub mod ip_api;
pub mod null_locator;

pub use ip_api::IpApiLocator;
pub use null_locator::NullLocator;
