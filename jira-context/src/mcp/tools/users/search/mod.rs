//! User search tool

use crate::markdown::to_markdown;
use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::SearchUsersRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::Value;

const FAILURE: FailureMode = FailureMode::invalid_request("search users matching");

/// Tool for searching users
#[derive(Default)]
pub struct SearchUsersTool;

impl SearchUsersTool {
    /// Creates a new instance of the SearchUsersTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SearchUsersTool {
    fn name(&self) -> &'static str {
        "search_users"
    }

    fn description(&self) -> &'static str {
        "Search users by a free-form query"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Free-form user query"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of users to return (default 10)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: SearchUsersRequest = BaseToolImpl::parse_arguments(arguments)?;

        let users = context
            .jira
            .search_users(&request.query, request.max_results)
            .await
            .map_err(|e| FAILURE.into_error(&request.query, e))?;

        Ok(BaseToolImpl::create_success_response(to_markdown(
            &Value::Array(users),
        )))
    }
}
