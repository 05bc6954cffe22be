//! Assignable users for a project

use crate::markdown::to_markdown;
use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::AssignableUsersForProjectRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::Value;

const FAILURE: FailureMode = FailureMode::invalid_request("fetch assignable users for project");

/// Tool for listing users assignable within a project
#[derive(Default)]
pub struct AssignableUsersForProjectTool;

impl AssignableUsersForProjectTool {
    /// Creates a new instance of the AssignableUsersForProjectTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AssignableUsersForProjectTool {
    fn name(&self) -> &'static str {
        "get_assignable_users_for_project"
    }

    fn description(&self) -> &'static str {
        "Get users assignable to issues of a project"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "project_key": {
                    "type": "string",
                    "description": "Key of the project"
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
            "required": ["project_key"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: AssignableUsersForProjectRequest = BaseToolImpl::parse_arguments(arguments)?;

        let users = context
            .jira
            .assignable_users_for_project(
                &request.project_key,
                &request.query,
                request.max_results,
            )
            .await
            .map_err(|e| FAILURE.into_error(&request.project_key, e))?;

        Ok(BaseToolImpl::create_success_response(to_markdown(
            &Value::Array(users),
        )))
    }
}
