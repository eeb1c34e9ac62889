use anyhow::Context;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use yahoo_finance_provider::mcp::YahooServer;
use yahoo_finance_provider::transport::TransportMode;

/// Yahoo Finance Provider - MCP server for Yahoo Finance market data
#[derive(Debug, Parser)]
#[command(
    name = "yahoo-finance-provider",
    version,
    about,
    after_help = "ENVIRONMENT VARIABLES:
    YAHOO_QUERY1_URL      Base URL for quote/chart/fundamentals/options/trending (default: https://query1.finance.yahoo.com)
    YAHOO_QUERY2_URL      Base URL for symbol search (default: https://query2.finance.yahoo.com)
    YAHOO_TIMEOUT_SECS    Request timeout in seconds, 0 disables it (default: 30)
    RUST_LOG              Logging level (default: info)"
)]
struct Cli {
    /// Transport mode
    #[arg(long, value_enum, default_value_t = TransportMode::Stdio)]
    mode: TransportMode,

    /// Run in stdio MCP mode (shortcut for --mode stdio)
    #[arg(long, conflicts_with_all = ["sse", "mode"])]
    stdio: bool,

    /// Run in SSE mode (shortcut for --mode sse)
    #[arg(long, conflicts_with = "mode")]
    sse: bool,

    /// Address to bind in SSE mode
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on in SSE mode
    #[arg(long, default_value_t = 8000)]
    port: u16,
}

impl Cli {
    fn transport_mode(&self) -> TransportMode {
        if self.stdio {
            TransportMode::Stdio
        } else if self.sse {
            TransportMode::Sse
        } else {
            self.mode
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // stdout is reserved for MCP protocol frames
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run(cli).await {
        tracing::error!("Fatal: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mode = cli.transport_mode();
    tracing::info!("Starting Yahoo Finance Provider in {} mode...", mode);

    let server = YahooServer::from_env().context("failed to initialize Yahoo Finance client")?;
    tracing::info!(client = ?server.client, "Provider capabilities: 6 tools");

    match mode {
        TransportMode::Stdio => {
            yahoo_finance_provider::transport::stdio::run_stdio_server(server).await
        }
        TransportMode::Sse => run_sse(server, SocketAddr::new(cli.host, cli.port)).await,
    }
}

#[cfg(feature = "sse")]
async fn run_sse(server: YahooServer, addr: SocketAddr) -> anyhow::Result<()> {
    yahoo_finance_provider::transport::sse::run_sse_server(server, addr).await
}

#[cfg(not(feature = "sse"))]
async fn run_sse(_server: YahooServer, _addr: SocketAddr) -> anyhow::Result<()> {
    anyhow::bail!("SSE mode not available - compile with 'sse' feature")
}
