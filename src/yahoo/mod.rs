//! Yahoo Finance API Client
//!
//! This module contains the rate-gated HTTP client for the Yahoo Finance endpoints.

pub mod client;
pub mod rate_limiter;
pub mod types;

// Re-export commonly used types
pub use client::{YahooClient, USER_AGENT};
pub use rate_limiter::{RateLimiter, MIN_REQUEST_INTERVAL};
pub use types::{ChartInterval, ChartRange, TrendingRegion};
