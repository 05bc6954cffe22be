//! Issue unassignment tool

use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::UnassignIssueRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

const FAILURE: FailureMode = FailureMode::invalid_request("unassign issue");

/// Tool for removing an issue's assignee
#[derive(Default)]
pub struct UnassignIssueTool;

impl UnassignIssueTool {
    /// Creates a new instance of the UnassignIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for UnassignIssueTool {
    fn name(&self) -> &'static str {
        "unassign_issue"
    }

    fn description(&self) -> &'static str {
        "Unassign a Jira issue"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Key of the issue to unassign"
                }
            },
            "required": ["issue_key"]
        })
    }

    fn requires_write(&self) -> bool {
        true
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: UnassignIssueRequest = BaseToolImpl::parse_arguments(arguments)?;

        context
            .jira
            .assign_issue(&request.issue_key, None)
            .await
            .map_err(|e| FAILURE.into_error(&request.issue_key, e))?;

        Ok(BaseToolImpl::create_success_response(format!(
            "Unassigned issue {}",
            request.issue_key
        )))
    }
}
