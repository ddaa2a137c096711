//! Tool type definitions for LLM function-calling.
//!
//! Provides provider-agnostic types for tool definitions, calls, and results.
//! Tools expose the voting operations as function-calling targets for LLM
//! agents.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Name of the catalog tool.
pub const LIST_VOTES: &str = "list_votes";
/// Name of the summary tool.
pub const GET_VOTING_SUMMARY: &str = "get_voting_summary";

/// A tool definition that can be sent to an LLM for function-calling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name (must match dispatch table in executor).
    pub name: String,
    /// Human-readable description of what the tool does.
    pub description: String,
    /// JSON Schema object describing the tool's parameters.
    pub parameters: serde_json::Value,
}

/// A tool call requested by the LLM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique identifier for this call (assigned by the provider).
    pub id: String,
    /// Name of the tool to invoke.
    pub name: String,
    /// JSON-encoded arguments for the tool.
    pub arguments: String,
}

/// The result of executing a tool call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// ID of the tool call this result corresponds to.
    pub tool_call_id: String,
    /// Result content: the JSON operation envelope, or an error message.
    pub content: String,
    /// Whether this result represents an error.
    pub is_error: bool,
}

/// A set of tool definitions offered to an agent.
#[derive(Debug, Clone, Default)]
pub struct ToolSet {
    definitions: Vec<ToolDefinition>,
}

impl ToolSet {
    /// Returns the tool definitions in this set.
    #[must_use]
    pub fn definitions(&self) -> &[ToolDefinition] {
        &self.definitions
    }

    /// Returns `true` if this set contains no tools.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Returns the number of tools in this set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Both voting tools: `list_votes` and `get_voting_summary`.
    #[must_use]
    pub fn voting_tools() -> Self {
        Self {
            definitions: vec![def_list_votes(), def_get_voting_summary()],
        }
    }

}

// ---------------------------------------------------------------------------
// Tool schema definitions
// ---------------------------------------------------------------------------

/// Defines the `list_votes` tool.
fn def_list_votes() -> ToolDefinition {
    ToolDefinition {
        name: LIST_VOTES.to_string(),
        description: "List the Swiss federal votes available on opendata.swiss. Returns each \
                       vote's date, English description, download URL, format and last \
                       modification time. No authentication required."
            .to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Return at most this many votes, in catalog order. Defaults to all."
                }
            },
            "additionalProperties": false
        }),
    }
}

/// Defines the `get_voting_summary` tool.
fn def_get_voting_summary() -> ToolDefinition {
    ToolDefinition {
        name: GET_VOTING_SUMMARY.to_string(),
        description: "Summarize the national result of one Swiss federal vote: title, date, \
                       accepted or rejected, turnout, yes share and absolute counts. Accepts \
                       \"Federal proposals: 1. Popular Initiative 'Name'\" (the quoted part is \
                       matched) or just the name."
            .to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "proposal_name": {
                    "type": "string",
                    "description": "Proposal name or ballot line; partial but specific titles work."
                }
            },
            "required": ["proposal_name"],
            "additionalProperties": false
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolset_voting() {
        let ts = ToolSet::voting_tools();
        assert_eq!(ts.len(), 2);
        let names: Vec<&str> = ts.definitions().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec![LIST_VOTES, GET_VOTING_SUMMARY]);
    }

    #[test]
    fn test_tool_definition_serialization() {
        let def = def_get_voting_summary();
        let json = serde_json::to_string(&def).unwrap_or_default();
        assert!(json.contains("get_voting_summary"));
        assert!(json.contains("proposal_name"));
    }

    #[test]
    fn test_tool_call_serialization() {
        let call = ToolCall {
            id: "call_123".to_string(),
            name: LIST_VOTES.to_string(),
            arguments: r#"{"limit":5}"#.to_string(),
        };
        let json = serde_json::to_string(&call).unwrap_or_default();
        assert!(json.contains("call_123"));
        assert!(json.contains("list_votes"));
    }

    #[test]
    fn test_all_definitions_have_valid_schemas() {
        for def in ToolSet::voting_tools().definitions() {
            assert!(!def.name.is_empty());
            assert!(!def.description.is_empty());
            assert!(def.parameters.is_object());
            assert_eq!(def.parameters["type"], "object");
        }
    }
}
