//! Visitor description for the "about you" page.

use async_trait::async_trait;
use woothee::parser::Parser;

/// What the site can tell a visitor about themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorProfile {
    pub os: String,
    pub browser: String,
    pub ip: String,
    pub location: Option<String>,
}

/// Operating system and browser parsed from a `User-Agent` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub os: String,
    pub browser: String,
}

const UNKNOWN: &str = "UNKNOWN";

impl Agent {
    /// Parses a user agent string.
    ///
    /// Missing or unrecognized parts are reported as `"Unknown"`. The OS
    /// version is appended when the OS name does not already carry it.
    pub fn parse(user_agent: Option<&str>) -> Self {
        let parser = Parser::new();
        let result = user_agent
            .and_then(|ua| parser.parse(ua))
            .unwrap_or_default();

        let os = if result.os.is_empty() || result.os == UNKNOWN {
            "Unknown".to_string()
        } else {
            let version = result.os_version.to_string();
            let has_version = !version.is_empty() && version != UNKNOWN;
            let already_versioned = result.os.chars().any(|c| c.is_ascii_digit());

            if has_version && !already_versioned {
                format!("{} {}", result.os, version)
            } else {
                result.os.to_string()
            }
        };

        let browser = if result.name.is_empty() || result.name == UNKNOWN {
            "Unknown".to_string()
        } else if result.version.is_empty() || result.version == UNKNOWN {
            result.name.to_string()
        } else {
            format!("{} {}", result.name, result.version)
        };

        Self { os, browser }
    }
}

/// IP geolocation collaborator.
///
/// Lookups are best effort: failures are reported as `None`, never as errors,
/// so a slow or unreachable provider cannot break page rendering.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeoLocator: Send + Sync {
    /// Returns the public IP of this server's network, used when the visitor
    /// address is private.
    async fn public_ip(&self) -> Option<String>;

    /// Returns a human-readable `"city, region, country"` for `ip`.
    async fn locate(&self, ip: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const FIREFOX_LINUX: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";

    #[test]
    fn test_parse_chrome_on_windows() {
        let agent = Agent::parse(Some(CHROME_WINDOWS));

        assert!(agent.os.starts_with("Windows"));
        assert_eq!(agent.browser, "Chrome 120.0.0.0");
    }

    #[test]
    fn test_parse_firefox_on_linux() {
        let agent = Agent::parse(Some(FIREFOX_LINUX));

        assert_eq!(agent.os, "Linux");
        assert_eq!(agent.browser, "Firefox 121.0");
    }

    #[test]
    fn test_parse_missing_user_agent() {
        let agent = Agent::parse(None);

        assert_eq!(agent.os, "Unknown");
        assert_eq!(agent.browser, "Unknown");
    }

    #[test]
    fn test_parse_garbage_user_agent() {
        let agent = Agent::parse(Some("qwerty"));

        assert_eq!(agent.browser, "Unknown");
    }
}
