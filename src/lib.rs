//! # swissvote
//!
//! Swiss federal voting results from the opendata.swiss catalog.
//!
//! The crate exposes two operations, both returning an
//! [`OperationResult`] envelope instead of failing:
//!
//! - [`fetch_catalog`] lists every downloadable vote of the dataset.
//! - [`resolve_summary`] finds the vote matching a proposal name and
//!   summarizes its national result.
//!
//! The same operations are available as LLM agent tools ([`tools`]), as a
//! CLI (`swissvote`), and, with the `mcp` feature, as an MCP server.
//!
//! ```no_run
//! use swissvote::resolve_summary;
//!
//! let result = resolve_summary("Federal proposals: 1. Popular Initiative 'For Clean Drinking Water'");
//! if let Some(summary) = result.payload {
//!     assert!(!summary.title.is_empty());
//! }
//! ```

pub mod cli;
pub mod client;
pub mod core;
pub mod error;
#[cfg(feature = "mcp")]
pub mod mcp;
pub mod tools;

pub use client::{
    ClientConfig, ClientConfigBuilder, HttpTransport, ReqwestTransport, VotingClient,
    fetch_catalog, resolve_summary,
};
pub use core::{OperationResult, ResourceDescriptor, VoteSummary, extract_search_term};
pub use error::{Error, ErrorKind, FetchError, Result};
pub use tools::{ToolCall, ToolExecutor, ToolResult, ToolSet};
