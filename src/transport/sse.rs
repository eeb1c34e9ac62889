//! SSE (Server-Sent Events) transport for MCP
//!
//! Uses rmcp's built-in SSE server implementation for remote connections.
//! Every SSE session gets its own `YahooServer`, but all sessions share the
//! process-wide rate gate through the cloned client.

use crate::mcp::YahooServer;
use std::net::SocketAddr;

pub use rmcp::transport::sse_server::{SseServer, SseServerConfig};

// Re-export CancellationToken for convenience (required by SseServerConfig)
pub use tokio_util::sync::CancellationToken;

/// Runs the MCP server over SSE until Ctrl+C
pub async fn run_sse_server(server: YahooServer, addr: SocketAddr) -> anyhow::Result<()> {
    tracing::info!("Starting SSE server on {}", addr);

    let config = SseServerConfig {
        bind: addr,
        sse_path: "/sse".to_string(),
        post_path: "/message".to_string(),
        ct: CancellationToken::new(),
        sse_keep_alive: None,
    };

    let sse_server = SseServer::serve_with_config(config).await?;
    tracing::info!("SSE server ready on {}", addr);
    tracing::info!("  SSE endpoint: http://{}/sse", addr);
    tracing::info!("  POST endpoint: http://{}/message", addr);

    let shutdown_ct = sse_server.with_service(move || server.clone());

    tokio::signal::ctrl_c().await?;
    tracing::info!("Received shutdown signal (Ctrl+C)");
    shutdown_ct.cancel();

    Ok(())
}
