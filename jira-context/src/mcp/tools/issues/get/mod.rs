//! Single-issue fetch tool
//!
//! Returns a Markdown heading of the form `# KEY: summary` followed by
//! the issue description. Missing fields render as empty strings.

use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetIssueRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::Value;

const FAILURE: FailureMode = FailureMode::not_found("fetch Jira issue");

/// Tool for fetching a single issue as Markdown
#[derive(Default)]
pub struct GetIssueTool;

impl GetIssueTool {
    /// Creates a new instance of the GetIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetIssueTool {
    fn name(&self) -> &'static str {
        "get_jira"
    }

    fn description(&self) -> &'static str {
        "Fetch the Jira issue identified by 'issue_key' and return a Markdown string: \"# ISSUE-KEY: summary\" followed by the description"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Key of the issue to fetch, e.g. PROJ-123"
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
        let request: GetIssueRequest = BaseToolImpl::parse_arguments(arguments)?;
        tracing::debug!("Fetching issue {}", request.issue_key);

        let issue = context
            .jira
            .get_issue(&request.issue_key)
            .await
            .map_err(|e| FAILURE.into_error(&request.issue_key, e))?;

        let summary = issue
            .pointer("/fields/summary")
            .and_then(Value::as_str)
            .unwrap_or("");
        let description = issue
            .pointer("/fields/description")
            .and_then(Value::as_str)
            .unwrap_or("");

        Ok(BaseToolImpl::create_success_response(format!(
            "# {}: {summary}\n\n{description}",
            request.issue_key
        )))
    }
}
