//! Comment creation tool

use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::AddCommentRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::Value;

const FAILURE: FailureMode = FailureMode::invalid_request("add comment to");

/// Tool for adding a comment to an issue
#[derive(Default)]
pub struct AddCommentTool;

impl AddCommentTool {
    /// Creates a new instance of the AddCommentTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AddCommentTool {
    fn name(&self) -> &'static str {
        "add_comment"
    }

    fn description(&self) -> &'static str {
        "Add a comment to a Jira issue"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Key of the issue to comment on"
                },
                "comment_body": {
                    "type": "string",
                    "description": "Comment text"
                }
            },
            "required": ["issue_key", "comment_body"]
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
        let request: AddCommentRequest = BaseToolImpl::parse_arguments(arguments)?;

        let comment = context
            .jira
            .add_comment(&request.issue_key, &request.comment_body)
            .await
            .map_err(|e| FAILURE.into_error(&request.issue_key, e))?;

        let comment_id = comment.get("id").and_then(Value::as_str).unwrap_or("");
        Ok(BaseToolImpl::create_success_response(format!(
            "Added comment to {}: {comment_id}",
            request.issue_key
        )))
    }
}
