//! MCP Tool Router and ServerHandler Implementation
//!
//! This module implements the MCP protocol ServerHandler trait and provides
//! tool routing for Yahoo Finance lookups using rmcp SDK macros.

use crate::error::ProviderError;
use crate::mcp::server::YahooServer;
use crate::mcp::types::{
    ChartParam, OptionsParam, QuoteParam, SearchParam, SymbolParam, TrendingParam,
};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::handler::server::ServerHandler;
use rmcp::model::{
    CallToolResult, Content, ErrorData, Implementation, InitializeResult, ProtocolVersion,
    ServerCapabilities, ToolsCapability,
};
use rmcp::{tool, tool_handler, tool_router};
use serde_json::Value;

/// Wraps an upstream payload as a single pretty-printed text content
fn json_result(value: &Value) -> Result<CallToolResult, ErrorData> {
    let text = serde_json::to_string_pretty(value).map_err(ProviderError::from)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// MCP Tool Router for Yahoo Finance operations
///
/// Uses the #[tool_router] macro to generate routing logic and JSON Schema
/// for all tools.
#[tool_router(vis = "pub")]
impl YahooServer {
    #[tool(description = "Get real-time stock quote for one or more symbols.")]
    pub async fn get_quote(
        &self,
        params: Parameters<QuoteParam>,
    ) -> Result<CallToolResult, ErrorData> {
        let data = self.client.get_quote(&params.0.symbols).await?;
        json_result(&data)
    }

    #[tool(description = "Get historical price data (OHLCV) for a symbol.")]
    pub async fn get_chart(
        &self,
        params: Parameters<ChartParam>,
    ) -> Result<CallToolResult, ErrorData> {
        let ChartParam {
            symbol,
            range,
            interval,
        } = params.0;

        let data = self.client.get_chart(&symbol, range, interval).await?;
        json_result(&data)
    }

    #[tool(description = "Search for stock/ETF/fund symbols by name or keyword.")]
    pub async fn search_symbols(
        &self,
        params: Parameters<SearchParam>,
    ) -> Result<CallToolResult, ErrorData> {
        let data = self.client.search_symbols(&params.0.query).await?;
        json_result(&data)
    }

    #[tool(description = "Get key financial statistics and fundamentals for a stock.")]
    pub async fn get_fundamentals(
        &self,
        params: Parameters<SymbolParam>,
    ) -> Result<CallToolResult, ErrorData> {
        let data = self.client.get_fundamentals(&params.0.symbol).await?;
        json_result(&data)
    }

    #[tool(description = "Get options chain data for a stock.")]
    pub async fn get_options(
        &self,
        params: Parameters<OptionsParam>,
    ) -> Result<CallToolResult, ErrorData> {
        let OptionsParam { symbol, date } = params.0;

        let data = self.client.get_options(&symbol, date.as_deref()).await?;
        json_result(&data)
    }

    #[tool(description = "Get trending tickers in a specific market.")]
    pub async fn get_trending(
        &self,
        params: Parameters<TrendingParam>,
    ) -> Result<CallToolResult, ErrorData> {
        let data = self.client.get_trending(params.0.region).await?;
        json_result(&data)
    }
}

/// ServerHandler trait implementation
///
/// Uses the #[tool_handler] macro to wire the tool router to the
/// ServerHandler trait.
#[tool_handler(router = self.tool_router)]
impl ServerHandler for YahooServer {
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "yahoo-finance-provider".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("Yahoo Finance MCP Provider".to_string()),
                website_url: None,
                icons: None,
            },
            instructions: Some(
                "Yahoo Finance market data: quotes, historical charts, symbol search, \
                fundamentals, options chains and trending tickers. Responses are the raw \
                upstream JSON. Outbound requests are spaced at least 500ms apart."
                    .to_string(),
            ),
        }
    }
}
