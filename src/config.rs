//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::block::DEFAULT_REVIEWS_SHOWN;
use crate::reviews::DEFAULT_CACHE_TTL_SECS;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// URL the review data source reads from
    pub reviews_endpoint: String,
    /// Request timeout for the review fetch, None = transport default
    pub reviews_timeout: Option<Duration>,
    /// Lifetime of a cached review list in seconds
    pub cache_ttl: u64,
    /// Background expiry sweep interval in seconds
    pub cleanup_interval: u64,
    /// Initial `number_of_reviews` for the block
    pub number_of_reviews: i64,
}

/// The service's own catalog endpoint on `port`.
fn local_catalog_endpoint(port: u16) -> String {
    format!("http://127.0.0.1:{}/mock-reviews", port)
}

fn parsed_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `REVIEWS_ENDPOINT` - Review source URL (default: this server's `/mock-reviews`)
    /// - `REVIEWS_TIMEOUT_SECS` - Fetch timeout in seconds (default: unset)
    /// - `CACHE_TTL` - Cached review lifetime in seconds (default: 3600)
    /// - `CLEANUP_INTERVAL` - Expiry sweep frequency in seconds (default: 60)
    /// - `NUMBER_OF_REVIEWS` - Slides shown by the block (default: 3)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let server_port = parsed_var("SERVER_PORT").unwrap_or(defaults.server_port);

        Self {
            server_port,
            reviews_endpoint: env::var("REVIEWS_ENDPOINT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| local_catalog_endpoint(server_port)),
            reviews_timeout: parsed_var("REVIEWS_TIMEOUT_SECS")
                .filter(|secs: &u64| *secs > 0)
                .map(Duration::from_secs),
            cache_ttl: parsed_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            cleanup_interval: parsed_var("CLEANUP_INTERVAL")
                .filter(|secs: &u64| *secs > 0)
                .unwrap_or(defaults.cleanup_interval),
            number_of_reviews: parsed_var("NUMBER_OF_REVIEWS")
                .unwrap_or(defaults.number_of_reviews),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            reviews_endpoint: local_catalog_endpoint(3000),
            reviews_timeout: None,
            cache_ttl: DEFAULT_CACHE_TTL_SECS,
            cleanup_interval: 60,
            number_of_reviews: i64::from(DEFAULT_REVIEWS_SHOWN),
        }
    }
}
