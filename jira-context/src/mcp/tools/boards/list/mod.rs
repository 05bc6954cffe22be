//! Board listing tool

use crate::markdown::to_markdown;
use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ListBoardsRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::Value;

const FAILURE: FailureMode = FailureMode::unavailable("fetch boards");

/// Tool for listing boards
#[derive(Default)]
pub struct ListBoardsTool;

impl ListBoardsTool {
    /// Creates a new instance of the ListBoardsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListBoardsTool {
    fn name(&self) -> &'static str {
        "list_boards"
    }

    fn description(&self) -> &'static str {
        "List boards, optionally filtered by project"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of boards to return (default 10)"
                },
                "project_key_or_id": {
                    "type": "string",
                    "description": "Optional project key or id to filter by"
                }
            },
            "required": []
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ListBoardsRequest = BaseToolImpl::parse_arguments(arguments)?;

        let boards = context
            .jira
            .boards(request.max_results, request.project_key_or_id.as_deref())
            .await
            .map_err(|e| FAILURE.into_error("", e))?;

        Ok(BaseToolImpl::create_success_response(to_markdown(
            &Value::Array(boards),
        )))
    }
}
