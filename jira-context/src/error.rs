//! Unified error handling for the Jira Context library
//!
//! Every fallible operation in the library returns [`Result`], whose error
//! type distinguishes transport failures, Jira API rejections, and local
//! configuration problems.

use thiserror::Error;

/// The main error type for the Jira Context library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JiraContextError {
    /// HTTP transport failed before a response was produced
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Jira answered with a non-success status code
    #[error("Jira API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by Jira
        status: u16,
        /// Response body text, as returned by Jira
        message: String,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Endpoint URL could not be parsed or joined
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Jira Context operations
pub type Result<T> = std::result::Result<T, JiraContextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_carries_status_and_body() {
        let err = JiraContextError::Api {
            status: 404,
            message: "Issue Does Not Exist".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("Issue Does Not Exist"));
    }

    #[test]
    fn test_config_error_display() {
        let err = JiraContextError::Config("missing JIRA_URL".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing JIRA_URL");
    }
}
