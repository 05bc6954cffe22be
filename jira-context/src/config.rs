//! Startup configuration loaded from the environment
//!
//! Connection parameters are read exactly once at process start; the
//! resulting [`JiraConfig`] is immutable for the process lifetime. The
//! write-enablement flag gates which tools the MCP server registers.

use crate::error::{JiraContextError, Result};

/// Environment variable naming the base URL of the Jira instance
pub const JIRA_URL_VAR: &str = "JIRA_URL";

/// Environment variable carrying the personal access token
pub const JIRA_API_TOKEN_VAR: &str = "JIRA_API_TOKEN";

/// Environment variable enabling write-capable tools when set to "true"
pub const JIRA_ENABLE_WRITE_VAR: &str = "JIRA_ENABLE_WRITE";

/// Connection and behavior configuration for the Jira Context server
#[derive(Debug, Clone)]
pub struct JiraConfig {
    /// Base URL of the Jira instance, e.g. `https://jira.example.com`
    pub url: String,
    /// Personal access token sent as a Bearer credential
    pub api_token: Option<String>,
    /// Whether mutating tools are registered at startup
    pub enable_write: bool,
}

impl JiraConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `JIRA_URL` is not set. A missing
    /// token is not an error here; it becomes one when a client is built.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var(JIRA_URL_VAR).map_err(|_| {
            JiraContextError::Config(format!(
                "missing required environment variable {JIRA_URL_VAR}"
            ))
        })?;

        let api_token = std::env::var(JIRA_API_TOKEN_VAR)
            .ok()
            .filter(|token| !token.is_empty());

        let enable_write = std::env::var(JIRA_ENABLE_WRITE_VAR)
            .map(|value| value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            url,
            api_token,
            enable_write,
        })
    }

    /// The configured token, or a configuration error if absent.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `JIRA_API_TOKEN` was not set.
    pub fn api_token(&self) -> Result<&str> {
        self.api_token.as_deref().ok_or_else(|| {
            JiraContextError::Config(format!(
                "missing required environment variable {JIRA_API_TOKEN_VAR}"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(JIRA_URL_VAR);
        std::env::remove_var(JIRA_API_TOKEN_VAR);
        std::env::remove_var(JIRA_ENABLE_WRITE_VAR);
    }

    #[test]
    #[serial]
    fn test_from_env_requires_url() {
        clear_env();
        let result = JiraConfig::from_env();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_to_read_only() {
        clear_env();
        std::env::set_var(JIRA_URL_VAR, "https://jira.example.com");
        std::env::set_var(JIRA_API_TOKEN_VAR, "secret");

        let config = JiraConfig::from_env().unwrap();
        assert_eq!(config.url, "https://jira.example.com");
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert!(!config.enable_write);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_enable_write_parsing_is_case_insensitive() {
        clear_env();
        std::env::set_var(JIRA_URL_VAR, "https://jira.example.com");

        std::env::set_var(JIRA_ENABLE_WRITE_VAR, "TRUE");
        assert!(JiraConfig::from_env().unwrap().enable_write);

        std::env::set_var(JIRA_ENABLE_WRITE_VAR, "false");
        assert!(!JiraConfig::from_env().unwrap().enable_write);

        std::env::set_var(JIRA_ENABLE_WRITE_VAR, "yes");
        assert!(!JiraConfig::from_env().unwrap().enable_write);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_token_is_treated_as_missing() {
        clear_env();
        std::env::set_var(JIRA_URL_VAR, "https://jira.example.com");
        std::env::set_var(JIRA_API_TOKEN_VAR, "");

        let config = JiraConfig::from_env().unwrap();
        assert!(config.api_token.is_none());
        assert!(config.api_token().is_err());
        clear_env();
    }
}
