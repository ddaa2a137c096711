//! MCP (Model Context Protocol) server for swissvote.
//!
//! Exposes the voting tools to external agents.
//!
//! # Feature Gate
//!
//! This module requires the `mcp` feature flag:
//! ```toml
//! [dependencies]
//! swissvote-rs = { version = "...", features = ["mcp"] }
//! ```
//!
//! # Architecture
//!
//! ```text
//! MCP Client (agent)
//!   ↓ get_voting_summary(proposal_name)
//! VotingMcpServer
//!   ↓ spawn_blocking (blocking reqwest client)
//! ToolExecutor::execute()
//!   ├── VotingClient::fetch_catalog()
//!   └── VotingClient::resolve_summary()
//!   ↓
//! OperationResult JSON → MCP Client
//! ```

pub mod params;
pub mod server;
pub mod transport;

pub use params::{ListVotesParams, VotingSummaryParams};
pub use server::VotingMcpServer;
pub use transport::{serve_sse, serve_stdio};
