//! # Jira Context
//!
//! A library for serving a Jira instance's operations over the Model
//! Context Protocol (MCP).
//!
//! ## Features
//!
//! - **Jira REST client**: a single authenticated handle to the Jira REST
//!   v2 and Agile 1.0 APIs, behind the [`JiraApi`] trait
//! - **Tool catalogue**: every Jira operation exposed as an independently
//!   invokable MCP tool with a typed argument schema
//! - **Write gating**: mutating tools are registered only when write mode
//!   is enabled at startup
//! - **Result normalization**: API responses rendered as Markdown text
//!   suitable for AI assistant consumption
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use jira_context::{JiraApi, JiraClient, JiraConfig, mcp::McpServer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = JiraConfig::from_env()?;
//! let client: Arc<dyn JiraApi> = Arc::new(JiraClient::new(&config)?);
//! let server = McpServer::new(client, config.enable_write);
//! // hand `server` to an rmcp transport (stdio, SSE, streamable HTTP)
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Jira REST API client
pub mod client;

/// Startup configuration from the environment
pub mod config;

/// Error types
pub mod error;

/// Markdown rendering of API results
pub mod markdown;

/// Model Context Protocol (MCP) server support
pub mod mcp;

pub use client::{JiraApi, JiraClient};
pub use config::JiraConfig;
pub use error::{JiraContextError, Result};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
