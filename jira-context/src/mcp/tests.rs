//! End-to-end tests for the MCP tool catalogue over a mock Jira adapter

use super::server::McpServer;
use super::tool_registry::{McpTool, ToolContext};
use super::tools;
use crate::client::JiraApi;
use crate::error::{JiraContextError, Result};
use async_trait::async_trait;
use rmcp::model::{CallToolResult, RawContent};
use rmcp::Error as McpError;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// The tools hidden when write mode is off
const WRITE_TOOLS: [&str; 10] = [
    "create_issue",
    "update_issue",
    "delete_issue",
    "add_comment",
    "delete_comment",
    "assign_issue",
    "unassign_issue",
    "transition_issue",
    "add_issue_labels",
    "remove_issue_labels",
];

/// In-memory Jira adapter.
///
/// Behavior is driven by the public fields; calls the test did not set up
/// fail with a 500, and setting `error` makes every call fail with it.
/// Mutations are recorded so tests can assert on the payloads sent.
#[derive(Default)]
struct MockJira {
    issue: Option<Value>,
    search_results: Vec<Value>,
    transitions: Vec<Value>,
    created_issue: Option<Value>,
    comment: Option<Value>,
    error: Option<(u16, String)>,

    created_fields: Mutex<Vec<Value>>,
    updates: Mutex<Vec<(String, Value)>>,
    assignments: Mutex<Vec<(String, Option<String>)>>,
    applied_transitions: Mutex<Vec<(String, String, Option<String>)>>,
}

impl MockJira {
    fn failing(status: u16, message: &str) -> Self {
        Self {
            error: Some((status, message.to_string())),
            ..Self::default()
        }
    }

    fn check_error(&self) -> Result<()> {
        match &self.error {
            Some((status, message)) => Err(JiraContextError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn not_mocked<T>() -> Result<T> {
        Err(JiraContextError::Api {
            status: 500,
            message: "not mocked".to_string(),
        })
    }
}

#[async_trait]
impl JiraApi for MockJira {
    async fn get_issue(&self, _issue_key: &str) -> Result<Value> {
        self.check_error()?;
        match &self.issue {
            Some(issue) => Ok(issue.clone()),
            None => Self::not_mocked(),
        }
    }

    async fn create_issue(&self, fields: Value) -> Result<Value> {
        self.check_error()?;
        self.created_fields.lock().unwrap().push(fields);
        Ok(self
            .created_issue
            .clone()
            .unwrap_or_else(|| json!({"key": "NEW-1"})))
    }

    async fn update_issue(&self, issue_key: &str, fields: Value) -> Result<()> {
        self.check_error()?;
        self.updates
            .lock()
            .unwrap()
            .push((issue_key.to_string(), fields));
        Ok(())
    }

    async fn delete_issue(&self, _issue_key: &str) -> Result<()> {
        self.check_error()
    }

    async fn search_issues(&self, _jql: &str, _max_results: u32) -> Result<Vec<Value>> {
        self.check_error()?;
        Ok(self.search_results.clone())
    }

    async fn add_comment(&self, _issue_key: &str, _body: &str) -> Result<Value> {
        self.check_error()?;
        Ok(self
            .comment
            .clone()
            .unwrap_or_else(|| json!({"id": "10050"})))
    }

    async fn delete_comment(&self, _issue_key: &str, _comment_id: &str) -> Result<()> {
        self.check_error()
    }

    async fn transitions(&self, _issue_key: &str) -> Result<Vec<Value>> {
        self.check_error()?;
        Ok(self.transitions.clone())
    }

    async fn transition_issue(
        &self,
        issue_key: &str,
        transition_id: &str,
        comment: Option<&str>,
    ) -> Result<()> {
        self.check_error()?;
        self.applied_transitions.lock().unwrap().push((
            issue_key.to_string(),
            transition_id.to_string(),
            comment.map(str::to_string),
        ));
        Ok(())
    }

    async fn assign_issue(&self, issue_key: &str, assignee: Option<&str>) -> Result<()> {
        self.check_error()?;
        self.assignments
            .lock()
            .unwrap()
            .push((issue_key.to_string(), assignee.map(str::to_string)));
        Ok(())
    }

    async fn projects(&self) -> Result<Vec<Value>> {
        self.check_error()?;
        Self::not_mocked()
    }

    async fn project(&self, _project_key: &str) -> Result<Value> {
        self.check_error()?;
        Self::not_mocked()
    }

    async fn project_components(&self, _project_key: &str) -> Result<Vec<Value>> {
        self.check_error()?;
        Self::not_mocked()
    }

    async fn project_versions(&self, _project_key: &str) -> Result<Vec<Value>> {
        self.check_error()?;
        Self::not_mocked()
    }

    async fn project_roles(&self, _project_key: &str) -> Result<Value> {
        self.check_error()?;
        Self::not_mocked()
    }

    async fn project_permission_scheme(&self, _project_key: &str) -> Result<Value> {
        self.check_error()?;
        Self::not_mocked()
    }

    async fn project_issue_types(&self, _project_key: &str) -> Result<Vec<Value>> {
        self.check_error()?;
        Self::not_mocked()
    }

    async fn current_user(&self) -> Result<Value> {
        self.check_error()?;
        Self::not_mocked()
    }

    async fn user(&self, _account_id: &str) -> Result<Value> {
        self.check_error()?;
        Self::not_mocked()
    }

    async fn search_users(&self, _query: &str, _max_results: u32) -> Result<Vec<Value>> {
        self.check_error()?;
        Self::not_mocked()
    }

    async fn assignable_users_for_project(
        &self,
        _project_key: &str,
        _query: &str,
        _max_results: u32,
    ) -> Result<Vec<Value>> {
        self.check_error()?;
        Self::not_mocked()
    }

    async fn assignable_users_for_issue(
        &self,
        _issue_key: &str,
        _query: &str,
        _max_results: u32,
    ) -> Result<Vec<Value>> {
        self.check_error()?;
        Self::not_mocked()
    }

    async fn boards(
        &self,
        _max_results: u32,
        _project_key_or_id: Option<&str>,
    ) -> Result<Vec<Value>> {
        self.check_error()?;
        Self::not_mocked()
    }

    async fn sprints(&self, _board_id: u64, _max_results: u32) -> Result<Vec<Value>> {
        self.check_error()?;
        Self::not_mocked()
    }

    async fn sprint(&self, _sprint_id: u64) -> Result<Value> {
        self.check_error()?;
        Self::not_mocked()
    }

    async fn sprints_by_name(&self, _board_id: u64, _state: Option<&str>) -> Result<Value> {
        self.check_error()?;
        Self::not_mocked()
    }
}

async fn run_tool(
    tool: &dyn McpTool,
    jira: &Arc<MockJira>,
    args: Value,
) -> std::result::Result<CallToolResult, McpError> {
    let adapter: Arc<dyn JiraApi> = jira.clone();
    let context = ToolContext::new(adapter);
    let arguments = args.as_object().cloned().unwrap_or_default();
    tool.execute(arguments, &context).await
}

fn response_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(content) => &content.text,
        _ => panic!("Expected text content"),
    }
}

#[tokio::test]
async fn test_get_jira_renders_markdown_heading() {
    let jira = Arc::new(MockJira {
        issue: Some(json!({
            "key": "TEST-123",
            "fields": {"summary": "Test Issue", "description": "This is a test issue"}
        })),
        ..MockJira::default()
    });

    let result = run_tool(
        &tools::issues::get::GetIssueTool::new(),
        &jira,
        json!({"issue_key": "TEST-123"}),
    )
    .await
    .unwrap();

    assert_eq!(
        response_text(&result),
        "# TEST-123: Test Issue\n\nThis is a test issue"
    );
    assert_eq!(result.is_error, Some(false));
}

#[tokio::test]
async fn test_get_jira_missing_fields_render_as_empty_strings() {
    let jira = Arc::new(MockJira {
        issue: Some(json!({"key": "TEST-123", "fields": {}})),
        ..MockJira::default()
    });

    let result = run_tool(
        &tools::issues::get::GetIssueTool::new(),
        &jira,
        json!({"issue_key": "TEST-123"}),
    )
    .await
    .unwrap();

    assert_eq!(response_text(&result), "# TEST-123: \n\n");
}

#[tokio::test]
async fn test_get_jira_failure_is_not_found_with_target_and_cause() {
    let jira = Arc::new(MockJira::failing(404, "Issue Does Not Exist"));

    let error = run_tool(
        &tools::issues::get::GetIssueTool::new(),
        &jira,
        json!({"issue_key": "TEST-404"}),
    )
    .await
    .unwrap_err();

    assert!(error.message.contains("TEST-404"));
    assert!(error.message.contains("Issue Does Not Exist"));
    assert_eq!(error.code, McpError::resource_not_found("x", None).code);
}

#[tokio::test]
async fn test_search_issues_projects_each_record() {
    let full_record = json!({
        "key": "TEST-7",
        "fields": {
            "summary": "A bug",
            "status": {"name": "Open"},
            "assignee": {"displayName": "Ada"},
            "customfield_12315948": {"displayName": "Grace"},
            "reporter": {"displayName": "Linus"},
            "priority": {"name": "High"},
            "issuetype": {"name": "Bug"},
            "fixVersions": [{"name": "1.2.0"}],
            "created": "2024-01-01T00:00:00.000+0000",
            "updated": "2024-01-02T00:00:00.000+0000",
            "description": "Details",
            "customfield_99999": "must not leak through"
        }
    });
    let jira = Arc::new(MockJira {
        search_results: vec![full_record],
        ..MockJira::default()
    });

    let result = run_tool(
        &tools::issues::search::SearchIssuesTool::new(),
        &jira,
        json!({"jql": "project = TEST"}),
    )
    .await
    .unwrap();

    let expected = crate::markdown::to_markdown(&json!([{
        "key": "TEST-7",
        "summary": "A bug",
        "status": "Open",
        "assignee": "Ada",
        "qa_contact": "Grace",
        "reporter": "Linus",
        "priority": "High",
        "issuetype": "Bug",
        "fixVersion": "1.2.0",
        "created": "2024-01-01T00:00:00.000+0000",
        "updated": "2024-01-02T00:00:00.000+0000",
        "description": "Details",
    }]));
    assert_eq!(response_text(&result), expected);
    assert!(!response_text(&result).contains("customfield_99999"));
}

#[tokio::test]
async fn test_search_issues_failure_is_invalid_request() {
    let jira = Arc::new(MockJira::failing(400, "bad jql"));

    let error = run_tool(
        &tools::issues::search::SearchIssuesTool::new(),
        &jira,
        json!({"jql": "not valid jql"}),
    )
    .await
    .unwrap_err();

    assert!(error.message.contains("not valid jql"));
    assert!(error.message.contains("bad jql"));
    assert_eq!(error.code, McpError::invalid_params("x", None).code);
}

#[tokio::test]
async fn test_list_projects_failure_is_unavailable() {
    let jira = Arc::new(MockJira::failing(503, "gateway down"));

    let error = run_tool(
        &tools::projects::list::ListProjectsTool::new(),
        &jira,
        json!({}),
    )
    .await
    .unwrap_err();

    assert!(error.message.starts_with("Failed to fetch projects: "));
    assert_eq!(error.code, McpError::internal_error("x", None).code);
}

#[tokio::test]
async fn test_transition_with_unknown_name_lists_available_options() {
    let jira = Arc::new(MockJira {
        transitions: vec![
            json!({"id": "11", "name": "To Do"}),
            json!({"id": "21", "name": "In Progress"}),
        ],
        ..MockJira::default()
    });

    let result = run_tool(
        &tools::issues::transition::TransitionIssueTool::new(),
        &jira,
        json!({"issue_key": "TEST-1", "transition_name": "Done"}),
    )
    .await
    .unwrap();

    assert_eq!(
        response_text(&result),
        "Transition 'Done' not found. Available transitions: To Do, In Progress"
    );
    assert_eq!(result.is_error, Some(false));
    assert!(jira.applied_transitions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_transition_matches_name_case_insensitively() {
    let jira = Arc::new(MockJira {
        transitions: vec![json!({"id": "21", "name": "In Progress"})],
        ..MockJira::default()
    });

    let result = run_tool(
        &tools::issues::transition::TransitionIssueTool::new(),
        &jira,
        json!({"issue_key": "TEST-1", "transition_name": "in progress"}),
    )
    .await
    .unwrap();

    assert_eq!(
        response_text(&result),
        "Transitioned issue TEST-1 to 'in progress'"
    );
    let applied = jira.applied_transitions.lock().unwrap();
    assert_eq!(
        *applied,
        vec![("TEST-1".to_string(), "21".to_string(), None)]
    );
}

#[tokio::test]
async fn test_transition_with_comment() {
    let jira = Arc::new(MockJira {
        transitions: vec![json!({"id": "31", "name": "Done"})],
        ..MockJira::default()
    });

    let result = run_tool(
        &tools::issues::transition::TransitionIssueTool::new(),
        &jira,
        json!({"issue_key": "TEST-1", "transition_name": "Done", "comment": "closing"}),
    )
    .await
    .unwrap();

    assert_eq!(
        response_text(&result),
        "Transitioned issue TEST-1 to 'Done' with comment"
    );
    let applied = jira.applied_transitions.lock().unwrap();
    assert_eq!(
        *applied,
        vec![(
            "TEST-1".to_string(),
            "31".to_string(),
            Some("closing".to_string())
        )]
    );
}

#[tokio::test]
async fn test_add_labels_is_idempotent_under_duplicates() {
    let jira = Arc::new(MockJira {
        issue: Some(json!({"key": "TEST-1", "fields": {"labels": ["x"]}})),
        ..MockJira::default()
    });

    run_tool(
        &tools::issues::add_labels::AddLabelsTool::new(),
        &jira,
        json!({"issue_key": "TEST-1", "labels": ["x", "y", "y"]}),
    )
    .await
    .unwrap();

    let updates = jira.updates.lock().unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].1, json!({"labels": ["x", "y"]}));
}

#[tokio::test]
async fn test_remove_labels_removes_only_named_labels() {
    let jira = Arc::new(MockJira {
        issue: Some(json!({"key": "TEST-1", "fields": {"labels": ["a", "b", "c"]}})),
        ..MockJira::default()
    });

    run_tool(
        &tools::issues::remove_labels::RemoveLabelsTool::new(),
        &jira,
        json!({"issue_key": "TEST-1", "labels": ["b"]}),
    )
    .await
    .unwrap();

    let updates = jira.updates.lock().unwrap();
    assert_eq!(updates[0].1, json!({"labels": ["a", "c"]}));
}

#[tokio::test]
async fn test_remove_absent_label_is_a_noop() {
    let jira = Arc::new(MockJira {
        issue: Some(json!({"key": "TEST-1", "fields": {"labels": ["a", "b"]}})),
        ..MockJira::default()
    });

    let result = run_tool(
        &tools::issues::remove_labels::RemoveLabelsTool::new(),
        &jira,
        json!({"issue_key": "TEST-1", "labels": ["zzz"]}),
    )
    .await
    .unwrap();

    assert_eq!(result.is_error, Some(false));
    let updates = jira.updates.lock().unwrap();
    assert_eq!(updates[0].1, json!({"labels": ["a", "b"]}));
}

#[tokio::test]
async fn test_unassign_issue_sends_null_assignee() {
    let jira = Arc::new(MockJira::default());

    let result = run_tool(
        &tools::issues::unassign::UnassignIssueTool::new(),
        &jira,
        json!({"issue_key": "TEST-1"}),
    )
    .await
    .unwrap();

    assert_eq!(response_text(&result), "Unassigned issue TEST-1");
    let assignments = jira.assignments.lock().unwrap();
    assert_eq!(*assignments, vec![("TEST-1".to_string(), None)]);
}

#[tokio::test]
async fn test_update_issue_without_fields_skips_the_remote_call() {
    let jira = Arc::new(MockJira::default());

    let result = run_tool(
        &tools::issues::update::UpdateIssueTool::new(),
        &jira,
        json!({"issue_key": "TEST-1"}),
    )
    .await
    .unwrap();

    assert_eq!(response_text(&result), "No updates provided for issue TEST-1");
    assert!(jira.updates.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_issue_renames_priority_and_assignee_fields() {
    let jira = Arc::new(MockJira::default());

    run_tool(
        &tools::issues::update::UpdateIssueTool::new(),
        &jira,
        json!({"issue_key": "TEST-1", "summary": "New", "priority": "High", "assignee": "ada"}),
    )
    .await
    .unwrap();

    let updates = jira.updates.lock().unwrap();
    assert_eq!(
        updates[0].1,
        json!({
            "summary": "New",
            "priority": {"name": "High"},
            "assignee": {"name": "ada"},
        })
    );
}

#[tokio::test]
async fn test_create_issue_builds_the_jira_payload() {
    let jira = Arc::new(MockJira::default());

    let result = run_tool(
        &tools::issues::create::CreateIssueTool::new(),
        &jira,
        json!({"project_key": "PROJ", "summary": "Add feature", "assignee": "ada"}),
    )
    .await
    .unwrap();

    assert_eq!(response_text(&result), "Created issue NEW-1: Add feature");
    let created = jira.created_fields.lock().unwrap();
    assert_eq!(
        created[0],
        json!({
            "project": {"key": "PROJ"},
            "summary": "Add feature",
            "description": "",
            "issuetype": {"name": "Task"},
            "priority": {"name": "Medium"},
            "assignee": {"name": "ada"},
        })
    );
}

#[tokio::test]
async fn test_get_issue_comments_projects_and_falls_back() {
    let jira = Arc::new(MockJira {
        issue: Some(json!({
            "key": "TEST-1",
            "fields": {"comment": {"comments": [
                {
                    "id": "1",
                    "author": {"displayName": "Ada"},
                    "body": "first",
                    "created": "2024-01-01T00:00:00.000+0000",
                    "updated": "2024-01-03T00:00:00.000+0000"
                },
                {"id": "2", "body": "second", "created": "2024-01-02T00:00:00.000+0000"}
            ]}}
        })),
        ..MockJira::default()
    });

    let result = run_tool(
        &tools::issues::comments::GetIssueCommentsTool::new(),
        &jira,
        json!({"issue_key": "TEST-1"}),
    )
    .await
    .unwrap();

    let expected = crate::markdown::to_markdown(&json!([
        {
            "id": "1",
            "author": "Ada",
            "body": "first",
            "created": "2024-01-01T00:00:00.000+0000",
            "updated": "2024-01-03T00:00:00.000+0000",
        },
        {
            "id": "2",
            "author": "Unknown",
            "body": "second",
            "created": "2024-01-02T00:00:00.000+0000",
            "updated": "2024-01-02T00:00:00.000+0000",
        }
    ]));
    assert_eq!(response_text(&result), expected);
}

#[test]
fn test_write_gate_hides_exactly_the_write_subset() {
    let read_only = McpServer::new(Arc::new(MockJira::default()), false);
    let writable = McpServer::new(Arc::new(MockJira::default()), true);

    let mut read_only_names = read_only.tool_registry().tool_names();
    let mut writable_names = writable.tool_registry().tool_names();
    read_only_names.sort();
    writable_names.sort();

    for name in WRITE_TOOLS {
        assert!(!read_only_names.contains(&name.to_string()));
        assert!(writable_names.contains(&name.to_string()));
        assert!(read_only.tool_registry().get(name).is_none());
    }

    let mut expected: Vec<String> = writable_names
        .iter()
        .filter(|name| !WRITE_TOOLS.contains(&name.as_str()))
        .cloned()
        .collect();
    expected.sort();
    assert_eq!(read_only_names, expected);
    assert_eq!(writable_names.len(), read_only_names.len() + WRITE_TOOLS.len());
}

#[test]
fn test_full_catalogue_size() {
    let writable = McpServer::new(Arc::new(MockJira::default()), true);
    assert_eq!(writable.tool_registry().len(), 30);

    let read_only = McpServer::new(Arc::new(MockJira::default()), false);
    assert_eq!(read_only.tool_registry().len(), 20);
}
