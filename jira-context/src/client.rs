//! Jira REST API client
//!
//! A single authenticated handle to a Jira instance, created once at
//! process start and shared by every tool invocation. The [`JiraApi`]
//! trait is the seam between the tool catalogue and the network: the MCP
//! server only ever sees `Arc<dyn JiraApi>`, so tests substitute an
//! in-memory adapter.
//!
//! [`JiraClient`] speaks the REST v2 API for issues, projects, and users,
//! and the Agile 1.0 API for boards and sprints. Each method performs
//! exactly one HTTP round trip; there is no caching, retrying, or
//! batching here.

use crate::config::JiraConfig;
use crate::error::{JiraContextError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{RequestBuilder, Response};
use serde_json::{json, Value};
use url::Url;

/// Operations the tool catalogue needs from a Jira instance.
///
/// Every method either returns a raw JSON value (or list of values) or a
/// [`JiraContextError`]; callers classify failures, this trait does not.
#[async_trait]
pub trait JiraApi: Send + Sync {
    /// Fetch a single issue by key, including its fields and comments.
    async fn get_issue(&self, issue_key: &str) -> Result<Value>;

    /// Create an issue from a prepared `fields` payload; returns the new
    /// issue record (at minimum its `key`).
    async fn create_issue(&self, fields: Value) -> Result<Value>;

    /// Overwrite the given fields on an existing issue.
    async fn update_issue(&self, issue_key: &str, fields: Value) -> Result<()>;

    /// Delete an issue by key.
    async fn delete_issue(&self, issue_key: &str) -> Result<()>;

    /// Run a JQL query, returning at most `max_results` issue records.
    async fn search_issues(&self, jql: &str, max_results: u32) -> Result<Vec<Value>>;

    /// Add a comment to an issue; returns the created comment record.
    async fn add_comment(&self, issue_key: &str, body: &str) -> Result<Value>;

    /// Delete a single comment from an issue.
    async fn delete_comment(&self, issue_key: &str, comment_id: &str) -> Result<()>;

    /// List the transitions currently legal for an issue.
    async fn transitions(&self, issue_key: &str) -> Result<Vec<Value>>;

    /// Apply a transition by id, optionally attaching a comment.
    async fn transition_issue(
        &self,
        issue_key: &str,
        transition_id: &str,
        comment: Option<&str>,
    ) -> Result<()>;

    /// Assign an issue to a user, or unassign it when `assignee` is `None`.
    async fn assign_issue(&self, issue_key: &str, assignee: Option<&str>) -> Result<()>;

    /// List all projects visible to the authenticated user.
    async fn projects(&self) -> Result<Vec<Value>>;

    /// Fetch a single project by key.
    async fn project(&self, project_key: &str) -> Result<Value>;

    /// List a project's components.
    async fn project_components(&self, project_key: &str) -> Result<Vec<Value>>;

    /// List a project's versions.
    async fn project_versions(&self, project_key: &str) -> Result<Vec<Value>>;

    /// Fetch a project's role map (role name to role URL).
    async fn project_roles(&self, project_key: &str) -> Result<Value>;

    /// Fetch the permission scheme assigned to a project.
    async fn project_permission_scheme(&self, project_key: &str) -> Result<Value>;

    /// List the issue types available in a project.
    async fn project_issue_types(&self, project_key: &str) -> Result<Vec<Value>>;

    /// Fetch the authenticated user's record.
    async fn current_user(&self) -> Result<Value>;

    /// Fetch a user record by account id.
    async fn user(&self, account_id: &str) -> Result<Value>;

    /// Search users by a free-form query.
    async fn search_users(&self, query: &str, max_results: u32) -> Result<Vec<Value>>;

    /// List users assignable to issues of a project.
    async fn assignable_users_for_project(
        &self,
        project_key: &str,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<Value>>;

    /// List users assignable to a specific issue.
    async fn assignable_users_for_issue(
        &self,
        issue_key: &str,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<Value>>;

    /// List boards, optionally filtered to one project.
    async fn boards(&self, max_results: u32, project_key_or_id: Option<&str>)
        -> Result<Vec<Value>>;

    /// List sprints on a board.
    async fn sprints(&self, board_id: u64, max_results: u32) -> Result<Vec<Value>>;

    /// Fetch a single sprint by id.
    async fn sprint(&self, sprint_id: u64) -> Result<Value>;

    /// Fetch a board's sprints keyed by sprint name, optionally filtered
    /// by sprint state.
    async fn sprints_by_name(&self, board_id: u64, state: Option<&str>) -> Result<Value>;
}

/// HTTP client for the Jira REST v2 and Agile 1.0 APIs
pub struct JiraClient {
    http: reqwest::Client,
    base: Url,
}

impl JiraClient {
    /// Build a client from configuration.
    ///
    /// The personal access token is installed as a default
    /// `Authorization: Bearer` header so every request carries it.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the token is absent or not a
    /// valid header value, and a URL error when the base URL is malformed.
    pub fn new(config: &JiraConfig) -> Result<Self> {
        let token = config.api_token()?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
            JiraContextError::Config("API token is not a valid header value".to_string())
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        // Url::join drops the last path segment unless the base ends in a
        // slash, so normalize here.
        let mut base_url = config.url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base = Url::parse(&base_url)?;

        Ok(Self { http, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }

    /// Send a request and reject non-success statuses, preserving the
    /// response body as the failure description.
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(JiraContextError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = self.endpoint(path)?;
        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.endpoint(path)?;
        let response = self.send(self.http.post(url).json(body)).await?;
        Ok(response.json().await?)
    }

    /// POST where Jira answers 204 No Content on success.
    async fn post_no_content(&self, path: &str, body: &Value) -> Result<()> {
        let url = self.endpoint(path)?;
        self.send(self.http.post(url).json(body)).await?;
        Ok(())
    }

    async fn put_no_content(&self, path: &str, body: &Value) -> Result<()> {
        let url = self.endpoint(path)?;
        self.send(self.http.put(url).json(body)).await?;
        Ok(())
    }

    async fn delete_no_content(&self, path: &str) -> Result<()> {
        let url = self.endpoint(path)?;
        self.send(self.http.delete(url)).await?;
        Ok(())
    }
}

/// Pull an array field out of a wrapper object, e.g. `issues` from a
/// search response or `values` from an Agile page.
fn take_array(mut value: Value, field: &str) -> Vec<Value> {
    match value.get_mut(field).map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

#[async_trait]
impl JiraApi for JiraClient {
    async fn get_issue(&self, issue_key: &str) -> Result<Value> {
        self.get_json(&format!("rest/api/2/issue/{issue_key}"), &[])
            .await
    }

    async fn create_issue(&self, fields: Value) -> Result<Value> {
        self.post_json("rest/api/2/issue", &json!({ "fields": fields }))
            .await
    }

    async fn update_issue(&self, issue_key: &str, fields: Value) -> Result<()> {
        self.put_no_content(
            &format!("rest/api/2/issue/{issue_key}"),
            &json!({ "fields": fields }),
        )
        .await
    }

    async fn delete_issue(&self, issue_key: &str) -> Result<()> {
        self.delete_no_content(&format!("rest/api/2/issue/{issue_key}"))
            .await
    }

    async fn search_issues(&self, jql: &str, max_results: u32) -> Result<Vec<Value>> {
        let response = self
            .get_json(
                "rest/api/2/search",
                &[
                    ("jql", jql.to_string()),
                    ("maxResults", max_results.to_string()),
                ],
            )
            .await?;
        Ok(take_array(response, "issues"))
    }

    async fn add_comment(&self, issue_key: &str, body: &str) -> Result<Value> {
        self.post_json(
            &format!("rest/api/2/issue/{issue_key}/comment"),
            &json!({ "body": body }),
        )
        .await
    }

    async fn delete_comment(&self, issue_key: &str, comment_id: &str) -> Result<()> {
        self.delete_no_content(&format!(
            "rest/api/2/issue/{issue_key}/comment/{comment_id}"
        ))
        .await
    }

    async fn transitions(&self, issue_key: &str) -> Result<Vec<Value>> {
        let response = self
            .get_json(&format!("rest/api/2/issue/{issue_key}/transitions"), &[])
            .await?;
        Ok(take_array(response, "transitions"))
    }

    async fn transition_issue(
        &self,
        issue_key: &str,
        transition_id: &str,
        comment: Option<&str>,
    ) -> Result<()> {
        let mut body = json!({ "transition": { "id": transition_id } });
        if let Some(text) = comment {
            body["update"] = json!({ "comment": [{ "add": { "body": text } }] });
        }
        self.post_no_content(&format!("rest/api/2/issue/{issue_key}/transitions"), &body)
            .await
    }

    async fn assign_issue(&self, issue_key: &str, assignee: Option<&str>) -> Result<()> {
        // `{"name": null}` is Jira's unassign request.
        self.put_no_content(
            &format!("rest/api/2/issue/{issue_key}/assignee"),
            &json!({ "name": assignee }),
        )
        .await
    }

    async fn projects(&self) -> Result<Vec<Value>> {
        let response = self.get_json("rest/api/2/project", &[]).await?;
        match response {
            Value::Array(items) => Ok(items),
            _ => Ok(Vec::new()),
        }
    }

    async fn project(&self, project_key: &str) -> Result<Value> {
        self.get_json(&format!("rest/api/2/project/{project_key}"), &[])
            .await
    }

    async fn project_components(&self, project_key: &str) -> Result<Vec<Value>> {
        let response = self
            .get_json(&format!("rest/api/2/project/{project_key}/components"), &[])
            .await?;
        match response {
            Value::Array(items) => Ok(items),
            _ => Ok(Vec::new()),
        }
    }

    async fn project_versions(&self, project_key: &str) -> Result<Vec<Value>> {
        let response = self
            .get_json(&format!("rest/api/2/project/{project_key}/versions"), &[])
            .await?;
        match response {
            Value::Array(items) => Ok(items),
            _ => Ok(Vec::new()),
        }
    }

    async fn project_roles(&self, project_key: &str) -> Result<Value> {
        self.get_json(&format!("rest/api/2/project/{project_key}/role"), &[])
            .await
    }

    async fn project_permission_scheme(&self, project_key: &str) -> Result<Value> {
        self.get_json(
            &format!("rest/api/2/project/{project_key}/permissionscheme"),
            &[],
        )
        .await
    }

    async fn project_issue_types(&self, project_key: &str) -> Result<Vec<Value>> {
        let response = self
            .get_json(
                "rest/api/2/issue/createmeta",
                &[
                    ("projectKeys", project_key.to_string()),
                    ("expand", "projects.issuetypes".to_string()),
                ],
            )
            .await?;
        let mut projects = take_array(response, "projects");
        match projects.first_mut() {
            Some(project) => Ok(take_array(project.take(), "issuetypes")),
            None => Ok(Vec::new()),
        }
    }

    async fn current_user(&self) -> Result<Value> {
        self.get_json("rest/api/2/myself", &[]).await
    }

    async fn user(&self, account_id: &str) -> Result<Value> {
        self.get_json(
            "rest/api/2/user",
            &[("accountId", account_id.to_string())],
        )
        .await
    }

    async fn search_users(&self, query: &str, max_results: u32) -> Result<Vec<Value>> {
        let response = self
            .get_json(
                "rest/api/2/user/search",
                &[
                    ("username", query.to_string()),
                    ("maxResults", max_results.to_string()),
                ],
            )
            .await?;
        match response {
            Value::Array(items) => Ok(items),
            _ => Ok(Vec::new()),
        }
    }

    async fn assignable_users_for_project(
        &self,
        project_key: &str,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<Value>> {
        let response = self
            .get_json(
                "rest/api/2/user/assignable/search",
                &[
                    ("project", project_key.to_string()),
                    ("username", query.to_string()),
                    ("maxResults", max_results.to_string()),
                ],
            )
            .await?;
        match response {
            Value::Array(items) => Ok(items),
            _ => Ok(Vec::new()),
        }
    }

    async fn assignable_users_for_issue(
        &self,
        issue_key: &str,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<Value>> {
        let response = self
            .get_json(
                "rest/api/2/user/assignable/search",
                &[
                    ("issueKey", issue_key.to_string()),
                    ("username", query.to_string()),
                    ("maxResults", max_results.to_string()),
                ],
            )
            .await?;
        match response {
            Value::Array(items) => Ok(items),
            _ => Ok(Vec::new()),
        }
    }

    async fn boards(
        &self,
        max_results: u32,
        project_key_or_id: Option<&str>,
    ) -> Result<Vec<Value>> {
        let mut query = vec![("maxResults", max_results.to_string())];
        if let Some(project) = project_key_or_id {
            query.push(("projectKeyOrId", project.to_string()));
        }
        let response = self.get_json("rest/agile/1.0/board", &query).await?;
        Ok(take_array(response, "values"))
    }

    async fn sprints(&self, board_id: u64, max_results: u32) -> Result<Vec<Value>> {
        let response = self
            .get_json(
                &format!("rest/agile/1.0/board/{board_id}/sprint"),
                &[("maxResults", max_results.to_string())],
            )
            .await?;
        Ok(take_array(response, "values"))
    }

    async fn sprint(&self, sprint_id: u64) -> Result<Value> {
        self.get_json(&format!("rest/agile/1.0/sprint/{sprint_id}"), &[])
            .await
    }

    async fn sprints_by_name(&self, board_id: u64, state: Option<&str>) -> Result<Value> {
        let mut query = Vec::new();
        if let Some(state) = state {
            query.push(("state", state.to_string()));
        }
        let response = self
            .get_json(&format!("rest/agile/1.0/board/{board_id}/sprint"), &query)
            .await?;

        let mut by_name = serde_json::Map::new();
        for sprint in take_array(response, "values") {
            if let Some(name) = sprint.get("name").and_then(Value::as_str) {
                by_name.insert(name.to_string(), sprint.clone());
            }
        }
        Ok(Value::Object(by_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_config(url: &str) -> JiraConfig {
        JiraConfig {
            url: url.to_string(),
            api_token: Some("token".to_string()),
            enable_write: false,
        }
    }

    #[test]
    fn test_new_requires_token() {
        let config = JiraConfig {
            url: "https://jira.example.com".to_string(),
            api_token: None,
            enable_write: false,
        };
        assert!(JiraClient::new(&config).is_err());
    }

    #[test]
    fn test_endpoint_joins_against_base_without_trailing_slash() {
        let client = JiraClient::new(&test_config("https://jira.example.com/jira")).unwrap();
        let url = client.endpoint("rest/api/2/issue/TEST-1").unwrap();
        assert_eq!(
            url.as_str(),
            "https://jira.example.com/jira/rest/api/2/issue/TEST-1"
        );
    }

    #[test]
    fn test_take_array_extracts_wrapper_field() {
        let wrapped = json!({"values": [{"id": 1}, {"id": 2}]});
        let items = take_array(wrapped, "values");
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_take_array_on_missing_field_is_empty() {
        assert!(take_array(json!({"other": 1}), "values").is_empty());
        assert!(take_array(json!({"values": "not-a-list"}), "values").is_empty());
    }
}
