//! Issue transition listing tool

use crate::markdown::to_markdown;
use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetIssueTransitionsRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{json, Value};

const FAILURE: FailureMode = FailureMode::invalid_request("get transitions for");

/// Tool for listing the transitions currently legal for an issue
#[derive(Default)]
pub struct GetIssueTransitionsTool;

impl GetIssueTransitionsTool {
    /// Creates a new instance of the GetIssueTransitionsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetIssueTransitionsTool {
    fn name(&self) -> &'static str {
        "get_issue_transitions"
    }

    fn description(&self) -> &'static str {
        "Get the transitions currently available for a Jira issue, as id/name pairs"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Key of the issue whose transitions to list"
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
        let request: GetIssueTransitionsRequest = BaseToolImpl::parse_arguments(arguments)?;

        let transitions = context
            .jira
            .transitions(&request.issue_key)
            .await
            .map_err(|e| FAILURE.into_error(&request.issue_key, e))?;

        let projected: Vec<Value> = transitions
            .iter()
            .map(|transition| {
                json!({
                    "id": transition.get("id").cloned().unwrap_or(Value::Null),
                    "name": transition.get("name").cloned().unwrap_or(Value::Null),
                })
            })
            .collect();

        Ok(BaseToolImpl::create_success_response(to_markdown(
            &Value::Array(projected),
        )))
    }
}
