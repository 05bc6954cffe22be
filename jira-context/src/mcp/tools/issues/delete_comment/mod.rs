//! Comment deletion tool

use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::DeleteCommentRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

const FAILURE: FailureMode = FailureMode::invalid_request("delete comment");

/// Tool for deleting a comment from an issue
#[derive(Default)]
pub struct DeleteCommentTool;

impl DeleteCommentTool {
    /// Creates a new instance of the DeleteCommentTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DeleteCommentTool {
    fn name(&self) -> &'static str {
        "delete_comment"
    }

    fn description(&self) -> &'static str {
        "Delete a comment from a Jira issue"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Key of the issue the comment belongs to"
                },
                "comment_id": {
                    "type": "string",
                    "description": "Id of the comment to delete"
                }
            },
            "required": ["issue_key", "comment_id"]
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
        let request: DeleteCommentRequest = BaseToolImpl::parse_arguments(arguments)?;

        let target = format!("{} from {}", request.comment_id, request.issue_key);
        context
            .jira
            .delete_comment(&request.issue_key, &request.comment_id)
            .await
            .map_err(|e| FAILURE.into_error(&target, e))?;

        Ok(BaseToolImpl::create_success_response(format!(
            "Deleted comment {} from {}",
            request.comment_id, request.issue_key
        )))
    }
}
