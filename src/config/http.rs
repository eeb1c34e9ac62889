//! Upstream HTTP Configuration
//!
//! Base URLs and client timeout for the Yahoo Finance endpoints.

use crate::error::ProviderError;
use std::time::Duration;

/// Default host for quote, chart, fundamentals, options and trending lookups
pub const DEFAULT_QUERY1_URL: &str = "https://query1.finance.yahoo.com";

/// Default host for symbol search
pub const DEFAULT_QUERY2_URL: &str = "https://query2.finance.yahoo.com";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Yahoo Finance client configuration
///
/// ## Environment Variables
///
/// - `YAHOO_QUERY1_URL`: Base URL for most endpoints (default: https://query1.finance.yahoo.com)
/// - `YAHOO_QUERY2_URL`: Base URL for search (default: https://query2.finance.yahoo.com)
/// - `YAHOO_TIMEOUT_SECS`: Request timeout, `0` disables it (default: 30)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YahooConfig {
    pub query1_url: String,
    pub query2_url: String,
    pub timeout: Option<Duration>,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            query1_url: DEFAULT_QUERY1_URL.to_string(),
            query2_url: DEFAULT_QUERY2_URL.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

impl YahooConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Config`] if `YAHOO_TIMEOUT_SECS` is not an integer.
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ProviderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let query1_url = lookup("YAHOO_QUERY1_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_QUERY1_URL.to_string());

        let query2_url = lookup("YAHOO_QUERY2_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_QUERY2_URL.to_string());

        let timeout_secs: u64 = match lookup("YAHOO_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ProviderError::Config(format!(
                    "YAHOO_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    raw
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            query1_url,
            query2_url,
            timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
        })
    }
}
