//! MCP server implementation for swissvote.
//!
//! Exposes the voting tools over MCP. Each call runs on
//! `spawn_blocking` with its own [`VotingClient`], since the blocking
//! `reqwest` client must not be created or dropped on the async runtime.

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use crate::client::{ClientConfig, VotingClient};
use crate::tools::{GET_VOTING_SUMMARY, LIST_VOTES, ToolCall, ToolExecutor, ToolResult};

use super::params::{ListVotesParams, VotingSummaryParams};

/// swissvote MCP server.
#[derive(Clone)]
pub struct VotingMcpServer {
    tool_router: ToolRouter<Self>,
    config: ClientConfig,
}

#[tool_router]
impl VotingMcpServer {
    /// List the federal votes available on opendata.swiss.
    #[tool(
        name = "list_votes",
        description = "List the Swiss federal votes available on opendata.swiss. Returns JSON with each vote's date, English description, download URL, format and last modification time."
    )]
    async fn list_votes(
        &self,
        Parameters(params): Parameters<ListVotesParams>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = serde_json::to_string(&params)
            .map_err(|e| McpError::invalid_params(format!("Invalid parameters: {e}"), None))?;
        self.dispatch(LIST_VOTES, arguments).await
    }

    /// Summarize the national result of one federal vote.
    #[tool(
        name = "get_voting_summary",
        description = "Summarize the national result of one Swiss federal vote: title, date, accepted or rejected, turnout, yes share and absolute counts. The text between single quotes in the proposal name is matched; without quotes the whole name is used."
    )]
    async fn get_voting_summary(
        &self,
        Parameters(params): Parameters<VotingSummaryParams>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = serde_json::to_string(&params)
            .map_err(|e| McpError::invalid_params(format!("Invalid parameters: {e}"), None))?;
        self.dispatch(GET_VOTING_SUMMARY, arguments).await
    }
}

#[tool_handler]
impl ServerHandler for VotingMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "swissvote".to_string(),
                title: Some("swissvote MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: Some("https://github.com/swissvote-rs/swissvote-rs".to_string()),
            },
            instructions: Some(
                "Swiss federal voting results from opendata.swiss. Use `list_votes` to browse \
                 available votes and `get_voting_summary` with a proposal name to get its \
                 national result."
                    .to_string(),
            ),
        }
    }
}

impl VotingMcpServer {
    /// Creates a new MCP server.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            tool_router: Self::tool_router(),
            config,
        }
    }

    /// Returns the client configuration used for every call.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Runs a tool call through [`ToolExecutor`] on the blocking pool.
    async fn dispatch(&self, name: &str, arguments: String) -> Result<CallToolResult, McpError> {
        let config = self.config.clone();
        let call = ToolCall {
            id: name.to_string(),
            name: name.to_string(),
            arguments,
        };

        let result: ToolResult = tokio::task::spawn_blocking(move || {
            let client = VotingClient::new(config).map_err(|e| {
                McpError::internal_error(format!("Failed to create HTTP client: {e}"), None)
            })?;
            Ok::<_, McpError>(ToolExecutor::new(&client).execute(&call))
        })
        .await
        .map_err(|e| McpError::internal_error(format!("Task join error: {e}"), None))??;

        let content = vec![Content::text(result.content)];
        if result.is_error {
            Ok(CallToolResult::error(content))
        } else {
            Ok(CallToolResult::success(content))
        }
    }
}
