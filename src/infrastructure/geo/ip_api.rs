//! Geo-IP lookups over HTTP.
//!
//! Uses ip-api.com style endpoints for location and ipify style endpoints for
//! the public address. Requests run on the blocking pool with a short timeout.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{trace, warn};
use ureq::Agent;

use crate::domain::visitor::GeoLocator;

const HTTP_TIMEOUT_SECS: u64 = 2;

/// Response body of an ip-api.com lookup.
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    city: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
    country: Option<String>,
}

impl IpApiResponse {
    /// Formats `"city, region, country"`, or `None` unless the lookup succeeded.
    fn into_location(self) -> Option<String> {
        if self.status != "success" {
            return None;
        }

        let parts: Vec<String> = [self.city, self.region_name, self.country]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

#[derive(Debug, Deserialize)]
struct PublicIpResponse {
    ip: String,
}

/// HTTP geo-IP provider.
pub struct IpApiLocator {
    agent: Agent,
    geoip_url_template: String,
    public_ip_url: String,
}

impl IpApiLocator {
    /// Creates a locator.
    ///
    /// `geoip_url_template` uses `{ip}` as the address placeholder, e.g.
    /// `http://ip-api.com/json/{ip}`.
    pub fn new(geoip_url_template: &str, public_ip_url: &str) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))
            .build()
            .into();

        Self {
            agent,
            geoip_url_template: geoip_url_template.to_string(),
            public_ip_url: public_ip_url.to_string(),
        }
    }

    fn fetch_json_sync<T: DeserializeOwned>(agent: &Agent, url: &str) -> Option<T> {
        let response = match agent.get(url).call() {
            Ok(r) => r,
            Err(e) => {
                warn!("Geo-IP request to \"{}\" failed: {}", url, e);
                return None;
            }
        };

        match response.into_body().read_json::<T>() {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("Geo-IP response from \"{}\" parse failed: {}", url, e);
                None
            }
        }
    }

    async fn fetch_json<T: DeserializeOwned + Send + 'static>(&self, url: String) -> Option<T> {
        let agent = self.agent.clone();

        tokio::task::spawn_blocking(move || Self::fetch_json_sync(&agent, &url))
            .await
            .unwrap_or_else(|e| {
                warn!("Geo-IP task failed: {}", e);
                None
            })
    }
}

#[async_trait]
impl GeoLocator for IpApiLocator {
    async fn public_ip(&self) -> Option<String> {
        let response: PublicIpResponse = self.fetch_json(self.public_ip_url.clone()).await?;
        trace!("Public IP resolved to {}", response.ip);
        Some(response.ip)
    }

    async fn locate(&self, ip: &str) -> Option<String> {
        let url = self.geoip_url_template.replace("{ip}", ip);
        let response: IpApiResponse = self.fetch_json(url).await?;
        response.into_location()
    }
}
