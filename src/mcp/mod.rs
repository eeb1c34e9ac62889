//! Model Context Protocol (MCP) server implementation for the Yahoo Finance provider
//!
//! Exposes six tools (quote, chart, search, fundamentals, options, trending),
//! each a thin request-shaping layer over the rate-gated `YahooClient`.
//!
//! The implementation uses rmcp SDK 0.8.1 with procedural macros for routing.

pub mod handler;
pub mod server;
pub mod types;

// Re-exports
pub use server::YahooServer;
