//! Failure translation for MCP operations
//!
//! Every tool wraps its Jira client calls with a [`FailureMode`] fixed at
//! the tool's definition site. Whatever the client raises, the caller sees
//! one of three outcomes — not found, invalid request, or unavailable —
//! with a message that names the operation's target identifier and carries
//! the underlying failure text. Nothing is retried or suppressed.

use crate::error::JiraContextError;
use rmcp::Error as McpError;

/// The bounded set of failure outcomes surfaced to MCP callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The target identifier does not resolve on the Jira instance
    NotFound,
    /// Malformed query or field, or a business-rule rejection by Jira
    InvalidRequest,
    /// The operation failed for reasons unrelated to its input
    Unavailable,
}

/// A tool's fixed failure classification, declared once per operation
#[derive(Debug, Clone, Copy)]
pub struct FailureMode {
    kind: FailureKind,
    action: &'static str,
}

impl FailureMode {
    /// Classification for lookup-by-identifier operations
    pub const fn not_found(action: &'static str) -> Self {
        Self {
            kind: FailureKind::NotFound,
            action,
        }
    }

    /// Classification for operations rejected over their input
    pub const fn invalid_request(action: &'static str) -> Self {
        Self {
            kind: FailureKind::InvalidRequest,
            action,
        }
    }

    /// Classification for operations with no identifiable bad input
    pub const fn unavailable(action: &'static str) -> Self {
        Self {
            kind: FailureKind::Unavailable,
            action,
        }
    }

    /// Build the caller-facing error for a failed client call.
    ///
    /// `target` is the caller-supplied primary argument (issue key,
    /// project key, sprint id, ...); it is embedded even when the
    /// underlying failure carries no such context, so the caller can
    /// correlate the error to the request. Operations without a target
    /// pass the empty string.
    pub fn into_error(self, target: &str, error: JiraContextError) -> McpError {
        let message = if target.is_empty() {
            format!("Failed to {}: {error}", self.action)
        } else {
            format!("Failed to {} {target}: {error}", self.action)
        };
        tracing::error!("{message}");

        match self.kind {
            FailureKind::NotFound => McpError::resource_not_found(message, None),
            FailureKind::InvalidRequest => McpError::invalid_params(message, None),
            FailureKind::Unavailable => McpError::internal_error(message, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error() -> JiraContextError {
        JiraContextError::Api {
            status: 404,
            message: "Issue Does Not Exist".to_string(),
        }
    }

    #[test]
    fn test_message_embeds_target_and_underlying_failure() {
        let mode = FailureMode::not_found("fetch Jira issue");
        let error = mode.into_error("TEST-404", api_error());

        assert!(error.message.contains("Failed to fetch Jira issue TEST-404"));
        assert!(error.message.contains("Issue Does Not Exist"));
    }

    #[test]
    fn test_targetless_message_has_no_dangling_space() {
        let mode = FailureMode::unavailable("fetch projects");
        let error = mode.into_error("", api_error());

        assert!(error.message.starts_with("Failed to fetch projects: "));
    }

    #[test]
    fn test_kinds_map_to_distinct_error_codes() {
        let not_found = FailureMode::not_found("fetch").into_error("X", api_error());
        let invalid = FailureMode::invalid_request("update").into_error("X", api_error());
        let unavailable = FailureMode::unavailable("list").into_error("", api_error());

        assert_ne!(not_found.code, invalid.code);
        assert_ne!(invalid.code, unavailable.code);
        assert_ne!(not_found.code, unavailable.code);
    }
}
