//! Project versions tool

use crate::markdown::to_markdown;
use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ProjectRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::Value;

const FAILURE: FailureMode = FailureMode::not_found("fetch versions for project");

/// Tool for listing a project's versions
#[derive(Default)]
pub struct GetProjectVersionsTool;

impl GetProjectVersionsTool {
    /// Creates a new instance of the GetProjectVersionsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetProjectVersionsTool {
    fn name(&self) -> &'static str {
        "get_project_versions"
    }

    fn description(&self) -> &'static str {
        "Get versions for a project"
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

        let versions = context
            .jira
            .project_versions(&request.project_key)
            .await
            .map_err(|e| FAILURE.into_error(&request.project_key, e))?;

        Ok(BaseToolImpl::create_success_response(to_markdown(
            &Value::Array(versions),
        )))
    }
}
