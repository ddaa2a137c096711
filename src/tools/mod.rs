//! Voting operations as LLM agent tools.
//!
//! [`ToolSet::voting_tools`] describes the tools with JSON Schemas;
//! [`ToolExecutor`] runs a [`ToolCall`] against a
//! [`VotingClient`](crate::client::VotingClient) and returns the JSON
//! envelope as the [`ToolResult`] content.

pub mod definition;
pub mod executor;

pub use definition::{
    GET_VOTING_SUMMARY, LIST_VOTES, ToolCall, ToolDefinition, ToolResult, ToolSet,
};
pub use executor::ToolExecutor;
