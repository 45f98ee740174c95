//! Builds the visitor profile shown on the "about you" page.

use std::net::IpAddr;
use std::sync::Arc;

use crate::domain::visitor::{Agent, GeoLocator, VisitorProfile};

pub struct VisitorService {
    geo: Arc<dyn GeoLocator>,
}

impl VisitorService {
    pub fn new(geo: Arc<dyn GeoLocator>) -> Self {
        Self { geo }
    }

    /// Describes a visitor from their user agent and address.
    ///
    /// Private and loopback addresses are replaced by this network's public
    /// address when it can be determined. Location is omitted when the
    /// lookup fails.
    pub async fn describe(&self, user_agent: Option<&str>, ip: IpAddr) -> VisitorProfile {
        let agent = Agent::parse(user_agent);

        let ip = if is_non_public(&ip) {
            self.geo
                .public_ip()
                .await
                .unwrap_or_else(|| ip.to_string())
        } else {
            ip.to_string()
        };

        let location = self.geo.locate(&ip).await;

        VisitorProfile {
            os: agent.os,
            browser: agent.browser,
            ip,
            location,
        }
    }
}

/// Returns true for addresses that geo-IP services cannot place.
pub fn is_non_public(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            v4.is_private()
                || v4.is_loopback()
                || v4.is_link_local()
                || v4.is_unspecified()
                || v4.is_broadcast()
        }
        IpAddr::V6(v6) => {
            if let Some(v4) = v6.to_ipv4_mapped() {
                return is_non_public(&IpAddr::V4(v4));
            }
            let first = v6.segments()[0];
            v6.is_loopback()
                || v6.is_unspecified()
                || (first & 0xfe00) == 0xfc00
                || (first & 0xffc0) == 0xfe80
        }
    }
}
