//! MCP Server Implementation
//!
//! This module contains the YahooServer struct which implements the MCP ServerHandler trait.

use crate::config::YahooConfig;
use crate::error::ProviderError;
use crate::yahoo::YahooClient;
use rmcp::handler::server::router::tool::ToolRouter;

/// Main Yahoo Finance MCP Server struct
///
/// Holds the rate-gated Yahoo client and the generated tool router.
#[derive(Clone)]
pub struct YahooServer {
    /// Yahoo Finance client for making requests
    pub client: YahooClient,

    /// Tool router for MCP tool routing
    pub tool_router: ToolRouter<Self>,
}

impl YahooServer {
    /// Creates a server around an existing client
    pub fn with_client(client: YahooClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    /// Creates a server configured from `YAHOO_*` environment variables
    pub fn from_env() -> Result<Self, ProviderError> {
        let config = YahooConfig::from_env()?;
        Ok(Self::with_client(YahooClient::from_config(&config)?))
    }
}
