//! JQL search tool
//!
//! Jira returns full issue records; this tool projects each one down to a
//! bounded field subset before rendering, so output size stays predictable
//! no matter how many custom fields the instance carries.

use crate::markdown::to_markdown;
use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::SearchIssuesRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{json, Value};

const FAILURE: FailureMode = FailureMode::invalid_request("search issues matching");

/// Custom field carrying the QA contact on this Jira instance
const QA_CONTACT_FIELD: &str = "customfield_12315948";

/// Tool for searching issues with JQL
#[derive(Default)]
pub struct SearchIssuesTool;

impl SearchIssuesTool {
    /// Creates a new instance of the SearchIssuesTool
    pub fn new() -> Self {
        Self
    }
}

/// Project a full issue record down to the essential fields.
fn simplify_issue(issue: &Value) -> Value {
    let field = |path: &str| issue.pointer(path).cloned().unwrap_or(Value::Null);

    json!({
        "key": field("/key"),
        "summary": field("/fields/summary"),
        "status": field("/fields/status/name"),
        "assignee": field("/fields/assignee/displayName"),
        "qa_contact": field(&format!("/fields/{QA_CONTACT_FIELD}/displayName")),
        "reporter": field("/fields/reporter/displayName"),
        "priority": field("/fields/priority/name"),
        "issuetype": field("/fields/issuetype/name"),
        "fixVersion": field("/fields/fixVersions/0/name"),
        "created": field("/fields/created"),
        "updated": field("/fields/updated"),
        "description": field("/fields/description"),
    })
}

#[async_trait]
impl McpTool for SearchIssuesTool {
    fn name(&self) -> &'static str {
        "search_issues"
    }

    fn description(&self) -> &'static str {
        "Search issues using JQL; returns one JSON block per matching issue with only the essential fields"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "jql": {
                    "type": "string",
                    "description": "JQL query, e.g. \"project = PROJ AND status = Open\""
                },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of issues to return (default 100)"
                }
            },
            "required": ["jql"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: SearchIssuesRequest = BaseToolImpl::parse_arguments(arguments)?;
        tracing::debug!("Searching issues with JQL: {}", request.jql);

        let issues = context
            .jira
            .search_issues(&request.jql, request.max_results)
            .await
            .map_err(|e| FAILURE.into_error(&request.jql, e))?;

        let simplified: Vec<Value> = issues.iter().map(simplify_issue).collect();
        Ok(BaseToolImpl::create_success_response(to_markdown(
            &Value::Array(simplified),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplify_issue_bounds_the_field_set() {
        let issue = json!({
            "key": "TEST-7",
            "fields": {
                "summary": "A bug",
                "status": {"name": "Open"},
                "assignee": {"displayName": "Ada"},
                "customfield_12315948": {"displayName": "Grace"},
                "reporter": {"displayName": "Linus"},
                "priority": {"name": "High"},
                "issuetype": {"name": "Bug"},
                "fixVersions": [{"name": "1.2.0"}, {"name": "1.3.0"}],
                "created": "2024-01-01T00:00:00.000+0000",
                "updated": "2024-01-02T00:00:00.000+0000",
                "description": "Details",
                "customfield_99999": "must not leak through"
            }
        });

        let simplified = simplify_issue(&issue);
        assert_eq!(simplified["key"], "TEST-7");
        assert_eq!(simplified["qa_contact"], "Grace");
        assert_eq!(simplified["fixVersion"], "1.2.0");
        assert_eq!(simplified.as_object().unwrap().len(), 12);
        assert!(simplified.get("customfield_99999").is_none());
    }

    #[test]
    fn test_simplify_issue_missing_fields_become_null() {
        let issue = json!({"key": "TEST-8", "fields": {}});
        let simplified = simplify_issue(&issue);
        assert_eq!(simplified["assignee"], Value::Null);
        assert_eq!(simplified["fixVersion"], Value::Null);
    }
}
