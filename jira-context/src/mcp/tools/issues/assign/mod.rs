//! Issue assignment tool

use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::AssignIssueRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

const FAILURE: FailureMode = FailureMode::invalid_request("assign issue");

/// Tool for assigning an issue to a user
#[derive(Default)]
pub struct AssignIssueTool;

impl AssignIssueTool {
    /// Creates a new instance of the AssignIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AssignIssueTool {
    fn name(&self) -> &'static str {
        "assign_issue"
    }

    fn description(&self) -> &'static str {
        "Assign a Jira issue to a user"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Key of the issue to assign"
                },
                "assignee": {
                    "type": "string",
                    "description": "User name of the assignee"
                }
            },
            "required": ["issue_key", "assignee"]
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
        let request: AssignIssueRequest = BaseToolImpl::parse_arguments(arguments)?;

        context
            .jira
            .assign_issue(&request.issue_key, Some(&request.assignee))
            .await
            .map_err(|e| FAILURE.into_error(&request.issue_key, e))?;

        Ok(BaseToolImpl::create_success_response(format!(
            "Assigned issue {} to {}",
            request.issue_key, request.assignee
        )))
    }
}
