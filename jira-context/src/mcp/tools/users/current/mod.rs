//! Current user tool

use crate::markdown::to_markdown;
use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

const FAILURE: FailureMode = FailureMode::unavailable("fetch current user");

/// Tool for fetching the authenticated user's record
#[derive(Default)]
pub struct GetCurrentUserTool;

impl GetCurrentUserTool {
    /// Creates a new instance of the GetCurrentUserTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetCurrentUserTool {
    fn name(&self) -> &'static str {
        "get_current_user"
    }

    fn description(&self) -> &'static str {
        "Get the authenticated user's info"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(
        &self,
        _arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let user = context
            .jira
            .current_user()
            .await
            .map_err(|e| FAILURE.into_error("", e))?;

        Ok(BaseToolImpl::create_success_response(to_markdown(&user)))
    }
}
