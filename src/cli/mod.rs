//! CLI interface for elicit.

pub mod handlers;
pub mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use output::OutputMode;

/// elicit - ask the human operator one typed question over MCP
#[derive(Parser)]
#[command(name = "elicit", version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: <config dir>/elicit/config.toml)
    #[arg(long, env = "ELICIT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start MCP server (stdio transport)
    Serve,

    /// List the advertised elicitation tools
    Tools {
        /// Output as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the argument schema of one tool
    Schema {
        /// Tool name (e.g. elicit_number)
        tool: String,
    },
}

/// Run a non-server command.
pub fn execute(command: &Commands) -> Result<()> {
    match command {
        Commands::Serve => anyhow::bail!("serve is handled by the binary entry point"),
        Commands::Tools { json } => {
            handlers::tools::handle_list_tools(OutputMode::from_json_flag(*json))
        }
        Commands::Schema { tool } => handlers::tools::handle_schema(tool),
    }
}
