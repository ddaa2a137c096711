//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};

/// swissvote: Swiss federal voting results from opendata.swiss.
///
/// Lists the available federal votes and summarizes the national result
/// of a single proposal.
#[derive(Parser, Debug)]
#[command(name = "swissvote")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Catalog endpoint (CKAN `package_show` action).
    #[arg(long, global = true, env = "SWISSVOTE_CATALOG_URL")]
    pub catalog_url: Option<String>,

    /// Dataset identifier sent as the `id` query parameter.
    #[arg(long, global = true, env = "SWISSVOTE_DATASET_ID")]
    pub dataset_id: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true, env = "SWISSVOTE_TIMEOUT_SECS")]
    pub timeout: Option<u64>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available federal votes.
    ///
    /// Shows date, description, download URL, format and last
    /// modification time of every resource, in catalog order.
    #[command(alias = "list", after_help = r#"Examples:
  swissvote catalog                          # All votes
  swissvote catalog --limit 5                # First five catalog entries
  swissvote --format json catalog | jq '.payload[].description_en'
"#)]
    Catalog {
        /// Show at most this many entries.
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Summarize the national result of one proposal.
    ///
    /// The text between the first pair of single quotes is matched against
    /// the catalog descriptions; without quotes the whole name is used.
    #[command(after_help = r#"Examples:
  swissvote summary "Federal proposals: 1. Popular Initiative 'For a responsible economy'"
  swissvote summary "CO2 Act"
  swissvote --format json summary "CO2 Act" | jq '.payload.yes_pct'
"#)]
    Summary {
        /// Proposal name or ballot line.
        proposal: String,
    },

    /// Show the search term a proposal name resolves to (no network).
    Term {
        /// Proposal name or ballot line.
        proposal: String,
    },

    /// Show the agent tool definitions.
    Tools,

    /// Start MCP (Model Context Protocol) server.
    #[cfg(feature = "mcp")]
    #[command(subcommand)]
    Mcp(McpCommands),
}

/// MCP server transports.
#[cfg(feature = "mcp")]
#[derive(Subcommand, Debug)]
pub enum McpCommands {
    /// Start MCP server with stdio transport.
    ///
    /// Reads JSON-RPC messages from stdin, writes responses to stdout.
    #[command(after_help = r#"Examples:
  swissvote mcp stdio                        # Start stdio MCP server
"#)]
    Stdio,

    /// Start MCP server with SSE/HTTP transport.
    ///
    /// Serves MCP's streamable HTTP transport at `/mcp`.
    #[command(after_help = r#"Examples:
  swissvote mcp sse                          # Listen on 127.0.0.1:8080
  swissvote mcp sse --host 0.0.0.0 --port 9000
"#)]
    Sse {
        /// Host to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind.
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}
