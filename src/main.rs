//! elicit - ask the human operator one typed question over MCP
//!
//! Usage:
//!   elicit serve                 Start MCP server on stdio
//!   elicit tools                 List the advertised tools
//!   elicit schema <tool>         Print a tool's argument schema
//!   elicit --help                Show all commands

use anyhow::Result;
use clap::Parser;

use elicit::cli::{Cli, Commands};
use elicit::config::load_config;
use elicit::mcp::run_mcp_server;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, fallback) = load_config(cli.config.as_deref())?;

    // Tracing to stderr (safe for MCP stdio transport)
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.log_filter))?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Some(e) = fallback {
        tracing::warn!("{:#}. Using default configuration.", e);
    }

    match &cli.command {
        Commands::Serve => run_mcp_server(config).await?,
        cmd => elicit::cli::execute(cmd)?,
    }

    Ok(())
}
