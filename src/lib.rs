// Library exports for yahoo-finance-provider

pub mod config; // Configuration management
pub mod error;
pub mod yahoo; // Yahoo Finance API client

#[cfg(feature = "mcp_server")]
pub mod mcp; // MCP server implementation

#[cfg(feature = "mcp_server")]
pub mod transport; // MCP transport layer (stdio, SSE)
