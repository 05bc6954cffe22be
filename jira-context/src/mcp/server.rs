//! MCP server implementation for serving the Jira tool catalogue

use crate::client::JiraApi;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use std::sync::Arc;

use super::tool_registry::{ToolContext, ToolRegistry};
use super::tools;

/// Short orientation text sent to connecting MCP clients
const SERVER_INSTRUCTIONS: &str = "Tools for working with a Jira instance. Use get_jira to read a single issue, search_issues for JQL queries, and the project/user/board tools for metadata. Mutating tools (create_issue, update_issue, transition_issue, ...) are only present when the server runs with write mode enabled.";

/// MCP server exposing Jira operations as tools
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<ToolRegistry>,
    tool_context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a new MCP server around a shared Jira client handle.
    ///
    /// The full tool catalogue is registered first; when `enable_write`
    /// is false the write-capable subset is removed before the registry
    /// is ever exposed, so this is the only moment the gate is evaluated.
    pub fn new(jira: Arc<dyn JiraApi>, enable_write: bool) -> Self {
        let mut tool_registry = ToolRegistry::new();
        tools::issues::register_issue_tools(&mut tool_registry);
        tools::projects::register_project_tools(&mut tool_registry);
        tools::users::register_user_tools(&mut tool_registry);
        tools::boards::register_board_tools(&mut tool_registry);

        if !enable_write {
            tool_registry.retain_read_only();
        }

        tracing::info!(
            "Registered {} tools (write mode {})",
            tool_registry.len(),
            if enable_write { "on" } else { "off" }
        );

        Self {
            tool_registry: Arc::new(tool_registry),
            tool_context: Arc::new(ToolContext::new(jira)),
        }
    }

    /// The registry backing this server, for introspection in tests
    pub fn tool_registry(&self) -> &ToolRegistry {
        &self.tool_registry
    }

    fn capabilities() -> ServerCapabilities {
        ServerCapabilities {
            prompts: None,
            tools: Some(ToolsCapability { list_changed: None }),
            resources: None,
            logging: None,
            completions: None,
            experimental: None,
        }
    }
}

impl ServerHandler for McpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );

        Ok(InitializeResult {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: Implementation {
                name: "Jira Context Server".into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(SERVER_INSTRUCTIONS.into()),
        })
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        if let Some(tool) = self.tool_registry.get(&request.name) {
            tool.execute(request.arguments.unwrap_or_default(), &self.tool_context)
                .await
        } else {
            Err(McpError::invalid_request(
                format!("Unknown tool: {}", request.name),
                None,
            ))
        }
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: Implementation {
                name: "Jira Context Server".into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(SERVER_INSTRUCTIONS.into()),
        }
    }
}
