//! Label addition tool
//!
//! Jira's label field is replaced wholesale, never patched: the tool reads
//! the current labels, computes the union with the requested ones, and
//! writes the full resulting list back. Duplicates are skipped, so adding
//! an already-present label is a no-op.

use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::AddLabelsRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{json, Value};

const FAILURE: FailureMode = FailureMode::invalid_request("add labels to");

/// Tool for adding labels to an issue
#[derive(Default)]
pub struct AddLabelsTool;

impl AddLabelsTool {
    /// Creates a new instance of the AddLabelsTool
    pub fn new() -> Self {
        Self
    }
}

/// Read an issue's current labels as owned strings.
pub(crate) fn current_labels(issue: &Value) -> Vec<String> {
    issue
        .pointer("/fields/labels")
        .and_then(Value::as_array)
        .map(|labels| {
            labels
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl McpTool for AddLabelsTool {
    fn name(&self) -> &'static str {
        "add_issue_labels"
    }

    fn description(&self) -> &'static str {
        "Add labels to a Jira issue; labels already present are left untouched"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Key of the issue to label"
                },
                "labels": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Labels to add"
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
        let request: AddLabelsRequest = BaseToolImpl::parse_arguments(arguments)?;

        let issue = context
            .jira
            .get_issue(&request.issue_key)
            .await
            .map_err(|e| FAILURE.into_error(&request.issue_key, e))?;

        let mut labels = current_labels(&issue);
        for label in &request.labels {
            if !labels.iter().any(|existing| existing == label) {
                labels.push(label.clone());
            }
        }

        context
            .jira
            .update_issue(&request.issue_key, json!({ "labels": labels }))
            .await
            .map_err(|e| FAILURE.into_error(&request.issue_key, e))?;

        Ok(BaseToolImpl::create_success_response(format!(
            "Added labels {} to issue {}",
            request.labels.join(", "),
            request.issue_key
        )))
    }
}
