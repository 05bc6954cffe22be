//! Label removal tool
//!
//! Reads the current labels, drops the requested ones, and writes the
//! full remaining list back. Removing a label that is not present is a
//! no-op, not an error.

use super::add_labels::current_labels;
use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::RemoveLabelsRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::json;

const FAILURE: FailureMode = FailureMode::invalid_request("remove labels from");

/// Tool for removing labels from an issue
#[derive(Default)]
pub struct RemoveLabelsTool;

impl RemoveLabelsTool {
    /// Creates a new instance of the RemoveLabelsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for RemoveLabelsTool {
    fn name(&self) -> &'static str {
        "remove_issue_labels"
    }

    fn description(&self) -> &'static str {
        "Remove labels from a Jira issue; labels not present are ignored"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Key of the issue to unlabel"
                },
                "labels": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Labels to remove"
                }
            },
            "required": ["issue_key", "labels"]
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
        let request: RemoveLabelsRequest = BaseToolImpl::parse_arguments(arguments)?;

        let issue = context
            .jira
            .get_issue(&request.issue_key)
            .await
            .map_err(|e| FAILURE.into_error(&request.issue_key, e))?;

        let labels: Vec<String> = current_labels(&issue)
            .into_iter()
            .filter(|label| !request.labels.contains(label))
            .collect();

        context
            .jira
            .update_issue(&request.issue_key, json!({ "labels": labels }))
            .await
            .map_err(|e| FAILURE.into_error(&request.issue_key, e))?;

        Ok(BaseToolImpl::create_success_response(format!(
            "Removed labels {} from issue {}",
            request.labels.join(", "),
            request.issue_key
        )))
    }
}
