//! Project permission scheme tool

use crate::markdown::to_markdown;
use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ProjectRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

const FAILURE: FailureMode = FailureMode::not_found("fetch permission scheme for project");

/// Tool for fetching the permission scheme assigned to a project
#[derive(Default)]
pub struct GetProjectPermissionSchemeTool;

impl GetProjectPermissionSchemeTool {
    /// Creates a new instance of the GetProjectPermissionSchemeTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetProjectPermissionSchemeTool {
    fn name(&self) -> &'static str {
        "get_project_permission_scheme"
    }

    fn description(&self) -> &'static str {
        "Get the permission scheme for a project"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "project_key": {
                    "type": "string",
                    "description": "Key of the project"
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
        let request: ProjectRequest = BaseToolImpl::parse_arguments(arguments)?;

        let scheme = context
            .jira
            .project_permission_scheme(&request.project_key)
            .await
            .map_err(|e| FAILURE.into_error(&request.project_key, e))?;

        Ok(BaseToolImpl::create_success_response(to_markdown(&scheme)))
    }
}
