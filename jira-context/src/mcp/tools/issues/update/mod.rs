//! Issue update tool
//!
//! Only the fields the caller supplies are sent; an update request with
//! no fields performs no remote call at all.

use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::UpdateIssueRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{json, Value};

const FAILURE: FailureMode = FailureMode::invalid_request("update issue");

/// Tool for updating an existing issue's fields
#[derive(Default)]
pub struct UpdateIssueTool;

impl UpdateIssueTool {
    /// Creates a new instance of the UpdateIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for UpdateIssueTool {
    fn name(&self) -> &'static str {
        "update_issue"
    }

    fn description(&self) -> &'static str {
        "Update summary, description, priority, or assignee on an existing Jira issue"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Key of the issue to update"
                },
                "summary": {
                    "type": "string",
                    "description": "New summary"
                },
                "description": {
                    "type": "string",
                    "description": "New description"
                },
                "priority": {
                    "type": "string",
                    "description": "New priority name"
                },
                "assignee": {
                    "type": "string",
                    "description": "New assignee user name"
                }
            },
            "required": ["issue_key"]
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
        let request: UpdateIssueRequest = BaseToolImpl::parse_arguments(arguments)?;

        let mut fields = serde_json::Map::new();
        if let Some(summary) = &request.summary {
            fields.insert("summary".to_string(), json!(summary));
        }
        if let Some(description) = &request.description {
            fields.insert("description".to_string(), json!(description));
        }
        if let Some(priority) = &request.priority {
            fields.insert("priority".to_string(), json!({ "name": priority }));
        }
        if let Some(assignee) = &request.assignee {
            fields.insert("assignee".to_string(), json!({ "name": assignee }));
        }

        if fields.is_empty() {
            return Ok(BaseToolImpl::create_success_response(format!(
                "No updates provided for issue {}",
                request.issue_key
            )));
        }

        context
            .jira
            .update_issue(&request.issue_key, Value::Object(fields))
            .await
            .map_err(|e| FAILURE.into_error(&request.issue_key, e))?;

        Ok(BaseToolImpl::create_success_response(format!(
            "Updated issue {} successfully",
            request.issue_key
        )))
    }
}
