//! Request types for MCP operations
//!
//! One struct per tool, deserialized from the caller's argument map.
//! Defaults mirror the tool schemas.

use serde::Deserialize;

fn default_search_max_results() -> u32 {
    100
}

fn default_listing_max_results() -> u32 {
    10
}

fn default_issue_type() -> String {
    "Task".to_string()
}

fn default_priority() -> String {
    "Medium".to_string()
}

/// Request to fetch a single issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetIssueRequest {
    /// Key of the issue to fetch, e.g. PROJ-123
    pub issue_key: String,
}

/// Request to search issues with JQL
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchIssuesRequest {
    /// JQL query string
    pub jql: String,
    /// Maximum number of issues to return
    #[serde(default = "default_search_max_results")]
    pub max_results: u32,
}

/// Request to list an issue's comments
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetIssueCommentsRequest {
    /// Key of the issue whose comments to list
    pub issue_key: String,
}

/// Request to list an issue's currently legal transitions
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetIssueTransitionsRequest {
    /// Key of the issue whose transitions to list
    pub issue_key: String,
}

/// Request to search users
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchUsersRequest {
    /// Free-form user query
    pub query: String,
    /// Maximum number of users to return
    #[serde(default = "default_listing_max_results")]
    pub max_results: u32,
}

/// Request addressing a project by key
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ProjectRequest {
    /// Key of the project, e.g. PROJ
    pub project_key: String,
}

/// Request to fetch a user by account id
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetUserRequest {
    /// Account id of the user
    pub account_id: String,
}

/// Request for users assignable within a project
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AssignableUsersForProjectRequest {
    /// Key of the project
    pub project_key: String,
    /// Optional name filter
    #[serde(default)]
    pub query: String,
    /// Maximum number of users to return
    #[serde(default = "default_listing_max_results")]
    pub max_results: u32,
}

/// Request for users assignable to a specific issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AssignableUsersForIssueRequest {
    /// Key of the issue
    pub issue_key: String,
    /// Optional name filter
    #[serde(default)]
    pub query: String,
    /// Maximum number of users to return
    #[serde(default = "default_listing_max_results")]
    pub max_results: u32,
}

/// Request to list boards
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListBoardsRequest {
    /// Maximum number of boards to return
    #[serde(default = "default_listing_max_results")]
    pub max_results: u32,
    /// Optional project key or id to filter by
    pub project_key_or_id: Option<String>,
}

/// Request to list sprints on a board
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListSprintsRequest {
    /// Id of the board
    pub board_id: u64,
    /// Maximum number of sprints to return
    #[serde(default = "default_listing_max_results")]
    pub max_results: u32,
}

/// Request to fetch a sprint by id
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetSprintRequest {
    /// Id of the sprint
    pub sprint_id: u64,
}

/// Request for a board's sprints keyed by name
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SprintsByNameRequest {
    /// Id of the board
    pub board_id: u64,
    /// Optional sprint state filter (future, active, closed)
    pub state: Option<String>,
}

/// Request to create an issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateIssueRequest {
    /// Key of the project to create the issue in
    pub project_key: String,
    /// Issue summary
    pub summary: String,
    /// Issue description
    #[serde(default)]
    pub description: String,
    /// Issue type name
    #[serde(default = "default_issue_type")]
    pub issue_type: String,
    /// Priority name
    #[serde(default = "default_priority")]
    pub priority: String,
    /// Optional assignee user name
    pub assignee: Option<String>,
}

/// Request to update an issue's fields
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateIssueRequest {
    /// Key of the issue to update
    pub issue_key: String,
    /// New summary, if changing
    pub summary: Option<String>,
    /// New description, if changing
    pub description: Option<String>,
    /// New priority name, if changing
    pub priority: Option<String>,
    /// New assignee user name, if changing
    pub assignee: Option<String>,
}

/// Request to delete an issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DeleteIssueRequest {
    /// Key of the issue to delete
    pub issue_key: String,
}

/// Request to add a comment to an issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddCommentRequest {
    /// Key of the issue to comment on
    pub issue_key: String,
    /// Comment text
    pub comment_body: String,
}

/// Request to delete a comment from an issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DeleteCommentRequest {
    /// Key of the issue the comment belongs to
    pub issue_key: String,
    /// Id of the comment to delete
    pub comment_id: String,
}

/// Request to assign an issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AssignIssueRequest {
    /// Key of the issue to assign
    pub issue_key: String,
    /// User name of the assignee
    pub assignee: String,
}

/// Request to unassign an issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UnassignIssueRequest {
    /// Key of the issue to unassign
    pub issue_key: String,
}

/// Request to transition an issue to a new status
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TransitionIssueRequest {
    /// Key of the issue to transition
    pub issue_key: String,
    /// Name of the transition, matched case-insensitively
    pub transition_name: String,
    /// Optional comment to attach to the transition
    pub comment: Option<String>,
}

/// Request to add labels to an issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddLabelsRequest {
    /// Key of the issue to label
    pub issue_key: String,
    /// Labels to add
    pub labels: Vec<String>,
}

/// Request to remove labels from an issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RemoveLabelsRequest {
    /// Key of the issue to unlabel
    pub issue_key: String,
    /// Labels to remove
    pub labels: Vec<String>,
}
