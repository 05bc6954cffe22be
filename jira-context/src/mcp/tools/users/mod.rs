//! User tools for MCP operations
//!
//! The current user, user lookup and search, and assignable-user queries
//! scoped to a project or an issue.

pub mod assignable_issue;
pub mod assignable_project;
pub mod current;
pub mod get;
pub mod search;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all user-related tools with the registry
pub fn register_user_tools(registry: &mut ToolRegistry) {
    registry.register(current::GetCurrentUserTool::new());
    registry.register(get::GetUserTool::new());
    registry.register(search::SearchUsersTool::new());
    registry.register(assignable_project::AssignableUsersForProjectTool::new());
    registry.register(assignable_issue::AssignableUsersForIssueTool::new());
}
