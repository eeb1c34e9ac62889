//! Stdio Transport for MCP Server
//!
//! Provides standard I/O transport for local MCP connections (e.g., Claude Desktop).

use crate::mcp::YahooServer;
use rmcp::ServiceExt;

/// Runs the MCP server with stdio transport
///
/// Messages are read from stdin and responses are written to stdout.
/// Logging is sent to stderr to avoid interfering with the MCP protocol.
///
/// # Returns
///
/// Returns Ok(()) when the client disconnects, or an error if the transport
/// cannot be established.
pub async fn run_stdio_server(server: YahooServer) -> anyhow::Result<()> {
    tracing::info!("Starting Yahoo Finance MCP server in stdio mode");

    let service = server.serve(rmcp::transport::stdio()).await?;

    tracing::info!("MCP server ready on stdio");

    service.waiting().await?;

    tracing::info!("MCP server shutdown complete");

    Ok(())
}
