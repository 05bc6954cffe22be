//! Board and sprint tools for MCP operations

pub mod list;
pub mod sprint;
pub mod sprints;
pub mod sprints_by_name;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all board-related tools with the registry
pub fn register_board_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListBoardsTool::new());
    registry.register(sprints::ListSprintsTool::new());
    registry.register(sprint::GetSprintTool::new());
    registry.register(sprints_by_name::SprintsByNameTool::new());
}
