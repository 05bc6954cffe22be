//! Model Context Protocol (MCP) server support
//!
//! The server exposes the Jira operation catalogue over rmcp. Tools are
//! registered into a [`tool_registry::ToolRegistry`] at construction time;
//! write-capable tools are removed up front when write mode is off, so a
//! read-only server never lists or resolves them.

/// MCP module structure
pub mod failure;
pub mod server;
pub mod tool_registry;
pub mod tools;
pub mod types;

#[cfg(test)]
mod tests;

pub use server::McpServer;
pub use tool_registry::{McpTool, ToolContext, ToolRegistry};
