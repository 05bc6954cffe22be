//! Project metadata tools for MCP operations
//!
//! Listing projects and fetching a single project's components, versions,
//! roles, permission scheme, and issue types.

pub mod components;
pub mod get;
pub mod issue_types;
pub mod list;
pub mod permission_scheme;
pub mod roles;
pub mod versions;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all project-related tools with the registry
pub fn register_project_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListProjectsTool::new());
    registry.register(get::GetProjectTool::new());
    registry.register(components::GetProjectComponentsTool::new());
    registry.register(versions::GetProjectVersionsTool::new());
    registry.register(roles::GetProjectRolesTool::new());
    registry.register(permission_scheme::GetProjectPermissionSchemeTool::new());
    registry.register(issue_types::GetProjectIssueTypesTool::new());
}
