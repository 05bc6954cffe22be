//! Issue deletion tool

use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::DeleteIssueRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

const FAILURE: FailureMode = FailureMode::invalid_request("delete issue");

/// Tool for deleting an issue
#[derive(Default)]
pub struct DeleteIssueTool;

impl DeleteIssueTool {
    /// Creates a new instance of the DeleteIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DeleteIssueTool {
    fn name(&self) -> &'static str {
        "delete_issue"
    }

    fn description(&self) -> &'static str {
        "Delete a Jira issue (use with caution)"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Key of the issue to delete"
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
        let request: DeleteIssueRequest = BaseToolImpl::parse_arguments(arguments)?;
        tracing::debug!("Deleting issue {}", request.issue_key);

        context
            .jira
            .delete_issue(&request.issue_key)
            .await
            .map_err(|e| FAILURE.into_error(&request.issue_key, e))?;

        Ok(BaseToolImpl::create_success_response(format!(
            "Deleted issue {}",
            request.issue_key
        )))
    }
}
