//! Issue tools for MCP operations
//!
//! Reading, searching, creating, updating, transitioning, commenting on,
//! labeling, assigning, and deleting Jira issues. Each tool is in its own
//! submodule with a dedicated implementation.

pub mod add_comment;
pub mod add_labels;
pub mod assign;
pub mod comments;
pub mod create;
pub mod delete;
pub mod delete_comment;
pub mod get;
pub mod remove_labels;
pub mod search;
pub mod transition;
pub mod transitions;
pub mod unassign;
pub mod update;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all issue-related tools with the registry
pub fn register_issue_tools(registry: &mut ToolRegistry) {
    registry.register(get::GetIssueTool::new());
    registry.register(search::SearchIssuesTool::new());
    registry.register(comments::GetIssueCommentsTool::new());
    registry.register(transitions::GetIssueTransitionsTool::new());
    registry.register(create::CreateIssueTool::new());
    registry.register(update::UpdateIssueTool::new());
    registry.register(delete::DeleteIssueTool::new());
    registry.register(add_comment::AddCommentTool::new());
    registry.register(delete_comment::DeleteCommentTool::new());
    registry.register(assign::AssignIssueTool::new());
    registry.register(unassign::UnassignIssueTool::new());
    registry.register(transition::TransitionIssueTool::new());
    registry.register(add_labels::AddLabelsTool::new());
    registry.register(remove_labels::RemoveLabelsTool::new());
}
