//! Yahoo Finance HTTP Client
//!
//! HTTP client wrapper for the public Yahoo Finance JSON endpoints.
//! Every request goes through the shared rate gate, carries the fixed
//! user-agent header and returns the upstream JSON untouched.

use crate::config::YahooConfig;
use crate::error::{ProviderError, Result};
use crate::yahoo::rate_limiter::RateLimiter;
use crate::yahoo::types::{
    require_non_blank, validate_expiration_date, ChartInterval, ChartRange, TrendingRegion,
    FUNDAMENTALS_MODULES, SEARCH_QUOTES_COUNT, TRENDING_COUNT,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Identifying user-agent sent with every upstream request
pub const USER_AGENT: &str = "mcp-yahoo-finance/1.0.0";

/// Characters left literal by URI component encoding
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a value for use as a single URL path segment or query value
///
/// ```
/// use yahoo_finance_provider::yahoo::client::encode_component;
///
/// assert_eq!(encode_component("AAPL,GOOGL"), "AAPL%2CGOOGL");
/// assert_eq!(encode_component("BRK.B"), "BRK.B");
/// ```
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Yahoo Finance REST API HTTP client
#[derive(Clone)]
pub struct YahooClient {
    client: Client,
    query1_url: String,
    query2_url: String,
    rate_limiter: Arc<RateLimiter>,
}

impl std::fmt::Debug for YahooClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooClient")
            .field("query1_url", &self.query1_url)
            .field("query2_url", &self.query2_url)
            .field("min_interval", &self.rate_limiter.min_interval())
            .finish()
    }
}

impl YahooClient {
    /// Creates a client with default endpoints and the process-wide rate gate
    pub fn new() -> Result<Self> {
        Self::from_config(&YahooConfig::default())
    }

    /// Creates a client from configuration, sharing the process-wide rate gate
    pub fn from_config(config: &YahooConfig) -> Result<Self> {
        Self::with_rate_limiter(config, RateLimiter::global())
    }

    /// Creates a client bound to a specific rate gate
    pub fn with_rate_limiter(config: &YahooConfig, rate_limiter: Arc<RateLimiter>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ProviderError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            query1_url: config.query1_url.clone(),
            query2_url: config.query2_url.clone(),
            rate_limiter,
        })
    }

    /// Fetches a URL through the rate gate and parses the body as JSON
    ///
    /// # Errors
    /// * `Transport` - connection, DNS or timeout failure
    /// * `Upstream` - non-2xx status; carries the status and up to 500 characters of body
    /// * `Parse` - the body is not valid JSON
    pub async fn fetch_json(&self, url: &str) -> Result<Value> {
        self.rate_limiter.wait().await;
        debug!(url, "Dispatching Yahoo Finance request");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), url, "Yahoo Finance returned an error status");
            return Err(ProviderError::upstream(status.as_u16(), &body));
        }

        let bytes = response.bytes().await?;
        let value: Value = serde_json::from_slice(&bytes)?;
        Ok(value)
    }

    pub fn quote_url(&self, symbols: &str) -> Result<String> {
        require_non_blank("symbols", symbols)?;
        Ok(format!(
            "{}/v7/finance/quote?symbols={}&crumb=",
            self.query1_url,
            encode_component(symbols)
        ))
    }

    pub fn chart_url(
        &self,
        symbol: &str,
        range: ChartRange,
        interval: ChartInterval,
    ) -> Result<String> {
        require_non_blank("symbol", symbol)?;
        Ok(format!(
            "{}/v8/finance/chart/{}?range={}&interval={}",
            self.query1_url,
            encode_component(symbol),
            range,
            interval
        ))
    }

    pub fn search_url(&self, query: &str) -> Result<String> {
        require_non_blank("query", query)?;
        Ok(format!(
            "{}/v1/finance/search?q={}&quotesCount={}&newsCount=0",
            self.query2_url,
            encode_component(query),
            SEARCH_QUOTES_COUNT
        ))
    }

    pub fn fundamentals_url(&self, symbol: &str) -> Result<String> {
        require_non_blank("symbol", symbol)?;
        Ok(format!(
            "{}/v10/finance/quoteSummary/{}?modules={}",
            self.query1_url,
            encode_component(symbol),
            FUNDAMENTALS_MODULES.join(",")
        ))
    }

    /// Options chain URL; `date` is appended verbatim when present
    pub fn options_url(&self, symbol: &str, date: Option<&str>) -> Result<String> {
        require_non_blank("symbol", symbol)?;
        let mut url = format!(
            "{}/v7/finance/options/{}",
            self.query1_url,
            encode_component(symbol)
        );

        if let Some(date) = validate_expiration_date(date)? {
            url.push_str(&format!("?date={}", date));
        }

        Ok(url)
    }

    pub fn trending_url(&self, region: TrendingRegion) -> String {
        format!(
            "{}/v1/finance/trending/{}?count={}",
            self.query1_url, region, TRENDING_COUNT
        )
    }

    /// Real-time quotes for a comma-separated list of symbols
    pub async fn get_quote(&self, symbols: &str) -> Result<Value> {
        let url = self.quote_url(symbols)?;
        self.fetch_json(&url).await
    }

    /// Historical OHLCV data
    pub async fn get_chart(
        &self,
        symbol: &str,
        range: ChartRange,
        interval: ChartInterval,
    ) -> Result<Value> {
        let url = self.chart_url(symbol, range, interval)?;
        self.fetch_json(&url).await
    }

    pub async fn search_symbols(&self, query: &str) -> Result<Value> {
        let url = self.search_url(query)?;
        self.fetch_json(&url).await
    }

    pub async fn get_fundamentals(&self, symbol: &str) -> Result<Value> {
        let url = self.fundamentals_url(symbol)?;
        self.fetch_json(&url).await
    }

    /// Options chain, nearest expiration unless `date` (epoch seconds) is given
    pub async fn get_options(&self, symbol: &str, date: Option<&str>) -> Result<Value> {
        let url = self.options_url(symbol, date)?;

        if let Some(expiration) = date
            .and_then(|d| d.parse::<i64>().ok())
            .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
        {
            debug!(symbol, %expiration, "Requesting options chain for expiration");
        }

        self.fetch_json(&url).await
    }

    pub async fn get_trending(&self, region: TrendingRegion) -> Result<Value> {
        let url = self.trending_url(region);
        self.fetch_json(&url).await
    }
}
