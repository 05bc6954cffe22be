//! Issue creation tool
//!
//! Renames tool arguments into Jira's create payload: the project key,
//! issue type, priority, and assignee all become nested name/key objects.

use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateIssueRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{json, Value};

const FAILURE: FailureMode = FailureMode::invalid_request("create issue in project");

/// Tool for creating a new issue
#[derive(Default)]
pub struct CreateIssueTool;

impl CreateIssueTool {
    /// Creates a new instance of the CreateIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateIssueTool {
    fn name(&self) -> &'static str {
        "create_issue"
    }

    fn description(&self) -> &'static str {
        "Create a new Jira issue in the given project"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "project_key": {
                    "type": "string",
                    "description": "Key of the project to create the issue in"
                },
                "summary": {
                    "type": "string",
                    "description": "Issue summary"
                },
                "description": {
                    "type": "string",
                    "description": "Issue description (default empty)"
                },
                "issue_type": {
                    "type": "string",
                    "description": "Issue type name (default \"Task\")"
                },
                "priority": {
                    "type": "string",
                    "description": "Priority name (default \"Medium\")"
                },
                "assignee": {
                    "type": "string",
                    "description": "Optional assignee user name"
                }
            },
            "required": ["project_key", "summary"]
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
        let request: CreateIssueRequest = BaseToolImpl::parse_arguments(arguments)?;
        tracing::debug!("Creating issue in project {}", request.project_key);

        let mut fields = json!({
            "project": { "key": request.project_key },
            "summary": request.summary,
            "description": request.description,
            "issuetype": { "name": request.issue_type },
            "priority": { "name": request.priority },
        });
        if let Some(assignee) = &request.assignee {
            fields["assignee"] = json!({ "name": assignee });
        }

        let created = context
            .jira
            .create_issue(fields)
            .await
            .map_err(|e| FAILURE.into_error(&request.project_key, e))?;

        let key = created.get("key").and_then(Value::as_str).unwrap_or("");
        Ok(BaseToolImpl::create_success_response(format!(
            "Created issue {key}: {}",
            request.summary
        )))
    }
}
