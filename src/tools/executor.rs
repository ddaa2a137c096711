//! Tool executor that dispatches tool calls to the voting operations.
//!
//! Maps tool names to direct calls on a [`VotingClient`]. The result
//! content is the operation's JSON envelope, so the agent sees the same
//! `{success, error, error_kind, payload}` shape as library callers.

use serde::{Deserialize, Serialize};

use crate::client::{HttpTransport, VotingClient};
use crate::core::OperationResult;
use crate::error::ToolError;

use super::definition::{GET_VOTING_SUMMARY, LIST_VOTES, ToolCall, ToolResult};

/// Maximum raw byte length of tool argument JSON from the LLM.
const MAX_TOOL_ARGS_LEN: usize = 10_000;

/// Executes tool calls against a borrowed [`VotingClient`].
pub struct ToolExecutor<'a, T: HttpTransport> {
    client: &'a VotingClient<T>,
}

impl<'a, T: HttpTransport> ToolExecutor<'a, T> {
    /// Creates a new executor backed by the given client.
    #[must_use]
    pub const fn new(client: &'a VotingClient<T>) -> Self {
        Self { client }
    }

    /// Dispatches a tool call to the appropriate operation.
    ///
    /// Validates raw argument size before dispatch to prevent oversized payloads.
    #[must_use]
    pub fn execute(&self, call: &ToolCall) -> ToolResult {
        if call.arguments.len() > MAX_TOOL_ARGS_LEN {
            return ToolResult {
                tool_call_id: call.id.clone(),
                content: format!(
                    "tool arguments too large ({} bytes, max {MAX_TOOL_ARGS_LEN})",
                    call.arguments.len()
                ),
                is_error: true,
            };
        }

        let result = match call.name.as_str() {
            LIST_VOTES => self.tool_list_votes(&call.arguments),
            GET_VOTING_SUMMARY => self.tool_get_voting_summary(&call.arguments),
            other => Err(ToolError::Execution {
                name: other.to_string(),
                message: "unknown tool".to_string(),
            }),
        };

        match result {
            Ok((content, success)) => ToolResult {
                tool_call_id: call.id.clone(),
                content,
                is_error: !success,
            },
            Err(e) => ToolResult {
                tool_call_id: call.id.clone(),
                content: e.to_string(),
                is_error: true,
            },
        }
    }

    // -----------------------------------------------------------------------
    // Tool implementations
    // -----------------------------------------------------------------------

    /// Lists catalog resources, optionally truncated to `limit`.
    fn tool_list_votes(&self, args: &str) -> Result<(String, bool), ToolError> {
        #[derive(Deserialize)]
        struct Args {
            limit: Option<usize>,
        }
        let args: Args = parse_args(LIST_VOTES, args)?;

        let mut envelope = self.client.fetch_catalog();
        if let (Some(limit), Some(payload)) = (args.limit, envelope.payload.as_mut()) {
            payload.truncate(limit);
        }
        render(LIST_VOTES, &envelope)
    }

    /// Resolves one proposal summary.
    fn tool_get_voting_summary(&self, args: &str) -> Result<(String, bool), ToolError> {
        #[derive(Deserialize)]
        struct Args {
            proposal_name: String,
        }
        let args: Args = parse_args(GET_VOTING_SUMMARY, args)?;

        let envelope = self.client.resolve_summary(&args.proposal_name);
        render(GET_VOTING_SUMMARY, &envelope)
    }
}

/// Parses tool arguments; blank input counts as `{}`.
fn parse_args<A: for<'de> Deserialize<'de>>(name: &str, args: &str) -> Result<A, ToolError> {
    let args = if args.trim().is_empty() { "{}" } else { args };
    serde_json::from_str(args).map_err(|e| ToolError::Execution {
        name: name.to_string(),
        message: format!("invalid arguments: {e}"),
    })
}

/// Serializes an envelope, returning it with its success flag.
fn render<P: Serialize>(
    name: &str,
    envelope: &OperationResult<P>,
) -> Result<(String, bool), ToolError> {
    let content = serde_json::to_string_pretty(envelope).map_err(|e| ToolError::Execution {
        name: name.to_string(),
        message: format!("serialization error: {e}"),
    })?;
    Ok((content, envelope.success))
}
