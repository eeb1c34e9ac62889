//! MCP transport layer
//!
//! Provides transport options for the MCP protocol:
//! - Stdio: Standard I/O for local connections (default)
//! - SSE: Server-Sent Events for remote connections

pub mod stdio;

#[cfg(feature = "sse")]
pub mod sse;

use std::fmt;

/// Transport mode selection for MCP server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TransportMode {
    /// Standard I/O transport (local MCP connections)
    #[default]
    Stdio,

    /// Server-Sent Events transport (remote MCP connections)
    Sse,
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Stdio => f.write_str("stdio"),
            TransportMode::Sse => f.write_str("sse"),
        }
    }
}
