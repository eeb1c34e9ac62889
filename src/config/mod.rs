//! Configuration Management
//!
//! This module handles loading the upstream endpoint configuration from the environment.

pub mod http;

// Re-export
pub use http::YahooConfig;
