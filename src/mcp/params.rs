//! MCP tool parameter types.
//!
//! Defines the input schemas for MCP tools using `schemars` for automatic
//! JSON Schema generation required by the MCP protocol.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `list_votes` MCP tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListVotesParams {
    /// Return at most this many votes, in catalog order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// Parameters for the `get_voting_summary` MCP tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VotingSummaryParams {
    /// Proposal name, e.g. `"Federal proposals: 1. Popular Initiative 'Name'"`
    /// or just `"Name"`.
    pub proposal_name: String,
}
