//! User lookup tool

use crate::markdown::to_markdown;
use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetUserRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

const FAILURE: FailureMode = FailureMode::not_found("fetch user");

/// Tool for fetching a user by account id
#[derive(Default)]
pub struct GetUserTool;

impl GetUserTool {
    /// Creates a new instance of the GetUserTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetUserTool {
    fn name(&self) -> &'static str {
        "get_user"
    }

    fn description(&self) -> &'static str {
        "Get a user by account id"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "account_id": {
                    "type": "string",
                    "description": "Account id of the user"
                }
            },
            "required": ["account_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: GetUserRequest = BaseToolImpl::parse_arguments(arguments)?;

        let user = context
            .jira
            .user(&request.account_id)
            .await
            .map_err(|e| FAILURE.into_error(&request.account_id, e))?;

        Ok(BaseToolImpl::create_success_response(to_markdown(&user)))
    }
}
