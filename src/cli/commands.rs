//! CLI command implementations.
//!
//! Commands that touch the network take a [`VotingClient`] so they can be
//! exercised against a scripted transport.

use std::time::Duration;

#[cfg(feature = "mcp")]
use crate::cli::parser::McpCommands;
use crate::cli::output::{OutputFormat, format_catalog, format_summary, format_term, format_tools};
use crate::cli::parser::{Cli, Commands};
use crate::client::{ClientConfig, HttpTransport, VotingClient};
use crate::core::extract_search_term;
use crate::error::Result;
use crate::tools::ToolSet;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the voting
/// operation fails.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Catalog { limit } => {
            let client = VotingClient::new(client_config(cli)?)?;
            cmd_catalog(&client, *limit, format)
        }
        Commands::Summary { proposal } => {
            let client = VotingClient::new(client_config(cli)?)?;
            cmd_summary(&client, proposal, format)
        }
        Commands::Term { proposal } => cmd_term(proposal, format),
        Commands::Tools => Ok(format_tools(ToolSet::voting_tools().definitions(), format)),

        #[cfg(feature = "mcp")]
        Commands::Mcp(sub) => cmd_mcp(sub, client_config(cli)?),
    }
}

/// Builds the client configuration: CLI flags → environment → defaults.
///
/// Clap already folds the `SWISSVOTE_*` variables into the flags, so the
/// builder only fills in defaults here.
fn client_config(cli: &Cli) -> Result<ClientConfig> {
    let mut builder = ClientConfig::builder();
    if let Some(url) = &cli.catalog_url {
        builder = builder.catalog_url(url);
    }
    if let Some(id) = &cli.dataset_id {
        builder = builder.dataset_id(id);
    }
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

// ==================== Voting Commands ====================

fn cmd_catalog<T: HttpTransport>(
    client: &VotingClient<T>,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<String> {
    let mut descriptors = client.try_fetch_catalog()?;
    if let Some(limit) = limit {
        descriptors.truncate(limit);
    }
    Ok(format_catalog(&descriptors, format))
}

fn cmd_summary<T: HttpTransport>(
    client: &VotingClient<T>,
    proposal: &str,
    format: OutputFormat,
) -> Result<String> {
    let summary = client.try_resolve_summary(proposal)?;
    Ok(format_summary(&summary, format))
}

fn cmd_term(proposal: &str, format: OutputFormat) -> Result<String> {
    let term = extract_search_term(proposal)?;
    Ok(format_term(proposal, &term, format))
}

// ==================== MCP Server ====================

/// Creates the MCP server and runs it until the client disconnects
/// (stdio) or the server is stopped (SSE).
#[cfg(feature = "mcp")]
fn cmd_mcp(cmd: &McpCommands, config: ClientConfig) -> Result<String> {
    use crate::error::CommandError;
    use crate::mcp::{VotingMcpServer, serve_sse, serve_stdio};

    let server = VotingMcpServer::new(config);

    let rt = tokio::runtime::Runtime::new().map_err(|e| {
        CommandError::ExecutionFailed(format!("Failed to create async runtime: {e}"))
    })?;

    rt.block_on(async {
        match cmd {
            McpCommands::Stdio => serve_stdio(server).await,
            McpCommands::Sse { host, port } => serve_sse(server, host, *port).await,
        }
    })
    .map_err(|e| CommandError::ExecutionFailed(format!("MCP server error: {e}")))?;

    Ok(String::new())
}
