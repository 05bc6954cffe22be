//! Issue transition tool
//!
//! A two-step protocol: fetch the transitions currently legal for the
//! issue, resolve the caller's transition name by case-insensitive exact
//! match, then apply it. An unresolvable name is not an error — the tool
//! answers with ordinary text listing the legal transition names so the
//! caller can retry with one of them.

use crate::mcp::failure::FailureMode;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::TransitionIssueRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::Value;

const FAILURE: FailureMode = FailureMode::invalid_request("transition issue");

/// Tool for moving an issue to a new status
#[derive(Default)]
pub struct TransitionIssueTool;

impl TransitionIssueTool {
    /// Creates a new instance of the TransitionIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for TransitionIssueTool {
    fn name(&self) -> &'static str {
        "transition_issue"
    }

    fn description(&self) -> &'static str {
        "Transition a Jira issue to a new status by transition name, optionally attaching a comment"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_key": {
                    "type": "string",
                    "description": "Key of the issue to transition"
                },
                "transition_name": {
                    "type": "string",
                    "description": "Name of the transition, matched case-insensitively"
                },
                "comment": {
                    "type": "string",
                    "description": "Optional comment to attach to the transition"
                }
            },
            "required": ["issue_key", "transition_name"]
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
        let request: TransitionIssueRequest = BaseToolImpl::parse_arguments(arguments)?;
        tracing::debug!(
            "Transitioning issue {} to '{}'",
            request.issue_key,
            request.transition_name
        );

        let transitions = context
            .jira
            .transitions(&request.issue_key)
            .await
            .map_err(|e| FAILURE.into_error(&request.issue_key, e))?;

        let transition_id = transitions.iter().find_map(|transition| {
            let name = transition.get("name").and_then(Value::as_str)?;
            if name.eq_ignore_ascii_case(&request.transition_name) {
                transition.get("id").and_then(Value::as_str)
            } else {
                None
            }
        });

        let Some(transition_id) = transition_id else {
            let available: Vec<&str> = transitions
                .iter()
                .filter_map(|t| t.get("name").and_then(Value::as_str))
                .collect();
            return Ok(BaseToolImpl::create_success_response(format!(
                "Transition '{}' not found. Available transitions: {}",
                request.transition_name,
                available.join(", ")
            )));
        };

        context
            .jira
            .transition_issue(&request.issue_key, transition_id, request.comment.as_deref())
            .await
            .map_err(|e| FAILURE.into_error(&request.issue_key, e))?;

        let message = if request.comment.is_some() {
            format!(
                "Transitioned issue {} to '{}' with comment",
                request.issue_key, request.transition_name
            )
        } else {
            format!(
                "Transitioned issue {} to '{}'",
                request.issue_key, request.transition_name
            )
        };
        Ok(BaseToolImpl::create_success_response(message))
    }
}
