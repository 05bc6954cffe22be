//! Sprints-by-name tool
//!
//! Renders a board's sprints as one record keyed by sprint name,
//! optionally filtered by sprint state.

use crate::markdown::to_markdown;
use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::SprintsByNameRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

const FAILURE: FailureMode = FailureMode::unavailable("fetch sprints by name for board");

/// Tool for fetching a board's sprints keyed by name
#[derive(Default)]
pub struct SprintsByNameTool;

impl SprintsByNameTool {
    /// Creates a new instance of the SprintsByNameTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SprintsByNameTool {
    fn name(&self) -> &'static str {
        "get_sprints_by_name"
    }

    fn description(&self) -> &'static str {
        "Get sprints by name for a board, optionally filtered by state"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "board_id": {
                    "type": "integer",
                    "description": "Id of the board"
                },
                "state": {
                    "type": "string",
                    "description": "Optional sprint state filter (future, active, closed)"
                }
            },
            "required": ["board_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: SprintsByNameRequest = BaseToolImpl::parse_arguments(arguments)?;

        let sprints = context
            .jira
            .sprints_by_name(request.board_id, request.state.as_deref())
            .await
            .map_err(|e| FAILURE.into_error(&request.board_id.to_string(), e))?;

        Ok(BaseToolImpl::create_success_response(to_markdown(&sprints)))
    }
}
