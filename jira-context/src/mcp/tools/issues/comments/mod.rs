//! Issue comment listing tool

use crate::markdown::to_markdown;
use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetIssueCommentsRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{json, Value};

const FAILURE: FailureMode = FailureMode::invalid_request("get comments for");

/// Tool for listing an issue's comments
#[derive(Default)]
pub struct GetIssueCommentsTool;

impl GetIssueCommentsTool {
    /// Creates a new instance of the GetIssueCommentsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetIssueCommentsTool {
    fn name(&self) -> &'static str {
        "get_issue_comments"
    }

    fn description(&self) -> &'static str {
        "Get all comments for a Jira issue with author, body, and timestamps"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Key of the issue whose comments to list"
                }
            },
            "required": ["issue_key"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: GetIssueCommentsRequest = BaseToolImpl::parse_arguments(arguments)?;

        let issue = context
            .jira
            .get_issue(&request.issue_key)
            .await
            .map_err(|e| FAILURE.into_error(&request.issue_key, e))?;

        let empty = Vec::new();
        let comments = issue
            .pointer("/fields/comment/comments")
            .and_then(Value::as_array)
            .unwrap_or(&empty);

        let projected: Vec<Value> = comments
            .iter()
            .map(|comment| {
                let created = comment.get("created").cloned().unwrap_or(Value::Null);
                // Never-edited comments have no `updated` timestamp.
                let updated = comment.get("updated").cloned().unwrap_or(created.clone());
                json!({
                    "id": comment.get("id").cloned().unwrap_or(Value::Null),
                    "author": comment
                        .pointer("/author/displayName")
                        .cloned()
                        .unwrap_or_else(|| Value::String("Unknown".to_string())),
                    "body": comment.get("body").cloned().unwrap_or(Value::Null),
                    "created": created,
                    "updated": updated,
                })
            })
            .collect();

        Ok(BaseToolImpl::create_success_response(to_markdown(
            &Value::Array(projected),
        )))
    }
}
