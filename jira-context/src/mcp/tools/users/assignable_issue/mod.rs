//! Assignable users for an issue

use crate::markdown::to_markdown;
use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::AssignableUsersForIssueRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::Value;

const FAILURE: FailureMode = FailureMode::invalid_request("fetch assignable users for issue");

/// Tool for listing users assignable to a specific issue
#[derive(Default)]
pub struct AssignableUsersForIssueTool;

impl AssignableUsersForIssueTool {
    /// Creates a new instance of the AssignableUsersForIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AssignableUsersForIssueTool {
    fn name(&self) -> &'static str {
        "get_assignable_users_for_issue"
    }

    fn description(&self) -> &'static str {
        "Get users assignable to a specific issue"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Key of the issue"
                },
                "query": {
                    "type": "string",
                    "description": "Optional name filter (default empty)"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of users to return (default 10)"
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
        let request: AssignableUsersForIssueRequest = BaseToolImpl::parse_arguments(arguments)?;

        let users = context
            .jira
            .assignable_users_for_issue(&request.issue_key, &request.query, request.max_results)
            .await
            .map_err(|e| FAILURE.into_error(&request.issue_key, e))?;

        Ok(BaseToolImpl::create_success_response(to_markdown(
            &Value::Array(users),
        )))
    }
}
