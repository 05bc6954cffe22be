//! MCP tool catalogue
//!
//! One submodule directory per tool, grouped by category. Each category
//! module exposes a `register_*_tools` function invoked by the server at
//! construction time; write-capable tools mark themselves via
//! `McpTool::requires_write` and are filtered out by the registry when
//! write mode is off.

pub mod boards;
pub mod issues;
pub mod projects;
pub mod users;
