//! MCP Tool Parameter Types
//!
//! This module defines parameter types for MCP tools with JsonSchema support.
//! Enumerated fields are validated while the arguments are deserialized, so
//! unsupported values never reach the HTTP client.

use crate::yahoo::types::{ChartInterval, ChartRange, TrendingRegion};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the quote lookup
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct QuoteParam {
    #[schemars(description = "Comma-separated ticker symbols (e.g. 'AAPL,GOOGL,MSFT')")]
    pub symbols: String,
}

/// Parameters for historical chart data
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ChartParam {
    #[schemars(description = "Ticker symbol (e.g. 'AAPL')")]
    pub symbol: String,

    #[serde(default)]
    #[schemars(description = "Time range (default: 1mo)")]
    pub range: ChartRange,

    #[serde(default)]
    #[schemars(description = "Candle interval (default: 1d)")]
    pub interval: ChartInterval,
}

/// Parameters for symbol search
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchParam {
    #[schemars(
        description = "Company name or keyword (e.g. 'Tesla', 'artificial intelligence ETF')"
    )]
    pub query: String,
}

/// Common parameter for single-symbol tools
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SymbolParam {
    #[schemars(description = "Ticker symbol")]
    pub symbol: String,
}

/// Parameters for options chain lookup
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct OptionsParam {
    #[schemars(description = "Ticker symbol")]
    pub symbol: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "Expiration date as epoch timestamp (optional, defaults to nearest)"
    )]
    pub date: Option<String>,
}

/// Parameters for trending tickers
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct TrendingParam {
    #[serde(default)]
    #[schemars(description = "Market region (default: US)")]
    pub region: TrendingRegion,
}
