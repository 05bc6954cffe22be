//! Single-sprint fetch tool

use crate::markdown::to_markdown;
use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetSprintRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

const FAILURE: FailureMode = FailureMode::not_found("fetch sprint");

/// Tool for fetching a sprint by id
#[derive(Default)]
pub struct GetSprintTool;

impl GetSprintTool {
    /// Creates a new instance of the GetSprintTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetSprintTool {
    fn name(&self) -> &'static str {
        "get_sprint"
    }

    fn description(&self) -> &'static str {
        "Get a sprint by id"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "sprint_id": {
                    "type": "integer",
                    "description": "Id of the sprint"
                }
            },
            "required": ["sprint_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: GetSprintRequest = BaseToolImpl::parse_arguments(arguments)?;

        let sprint = context
            .jira
            .sprint(request.sprint_id)
            .await
            .map_err(|e| FAILURE.into_error(&request.sprint_id.to_string(), e))?;

        Ok(BaseToolImpl::create_success_response(to_markdown(&sprint)))
    }
}
