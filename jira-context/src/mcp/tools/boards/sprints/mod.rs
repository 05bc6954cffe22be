//! Sprint listing tool

use crate::markdown::to_markdown;
use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ListSprintsRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::Value;

const FAILURE: FailureMode = FailureMode::unavailable("fetch sprints for board");

/// Tool for listing sprints on a board
#[derive(Default)]
pub struct ListSprintsTool;

impl ListSprintsTool {
    /// Creates a new instance of the ListSprintsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListSprintsTool {
    fn name(&self) -> &'static str {
        "list_sprints"
    }

    fn description(&self) -> &'static str {
        "List sprints for a board"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "board_id": {
                    "type": "integer",
                    "description": "Id of the board"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of sprints to return (default 10)"
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
        let request: ListSprintsRequest = BaseToolImpl::parse_arguments(arguments)?;

        let sprints = context
            .jira
            .sprints(request.board_id, request.max_results)
            .await
            .map_err(|e| FAILURE.into_error(&request.board_id.to_string(), e))?;

        Ok(BaseToolImpl::create_success_response(to_markdown(
            &Value::Array(sprints),
        )))
    }
}
