//! CLI layer for swissvote.
//!
//! Provides the command-line interface using clap, with commands for
//! listing votes, summarizing a proposal, and serving the agent tools.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
#[cfg(feature = "mcp")]
pub use parser::McpCommands;
pub use parser::{Cli, Commands};
