//! Transport front: serve the MCP tool catalogue over stdio, SSE, or
//! streamable HTTP.
//!
//! The server itself is transport-agnostic; this module only builds it
//! once from the environment and hands it to the selected rmcp transport.

use crate::cli::TransportMode;
use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};
use jira_context::mcp::McpServer;
use jira_context::{JiraApi, JiraClient, JiraConfig};
use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;

pub async fn run_server(transport: TransportMode, host: &str, port: u16) -> i32 {
    let config = match JiraConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return EXIT_ERROR;
        }
    };

    let client = match JiraClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create Jira client: {}", e);
            return EXIT_ERROR;
        }
    };

    let jira: Arc<dyn JiraApi> = Arc::new(client);
    let server = McpServer::new(jira, config.enable_write);

    match transport {
        TransportMode::Stdio => serve_stdio(server).await,
        TransportMode::Sse => serve_sse(server, host, port).await,
        TransportMode::Http => serve_http(server, host, port).await,
    }
}

fn resolve_addr(host: &str, port: u16) -> Option<SocketAddr> {
    (host, port)
        .to_socket_addrs()
        .ok()
        .and_then(|mut addrs| addrs.next())
}

async fn serve_stdio(server: McpServer) -> i32 {
    use rmcp::serve_server;
    use rmcp::transport::io::stdio;
    use tokio_util::sync::CancellationToken;

    // Set up cancellation token and signal handler
    let ct = CancellationToken::new();
    let ct_clone = ct.clone();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            ct_clone.cancel();
        }
    });

    match serve_server(server, stdio()).await {
        Ok(_running_service) => {
            tracing::info!("MCP server started on stdio");

            // Wait for cancellation
            ct.cancelled().await;

            tracing::info!("MCP server exited");
            EXIT_SUCCESS
        }
        Err(e) => {
            tracing::error!("MCP server error: {}", e);
            EXIT_WARNING
        }
    }
}

async fn serve_sse(server: McpServer, host: &str, port: u16) -> i32 {
    use rmcp::transport::sse_server::SseServer;

    let Some(addr) = resolve_addr(host, port) else {
        tracing::error!("Cannot resolve bind address {host}:{port}");
        return EXIT_ERROR;
    };

    let sse_server = match SseServer::serve(addr).await {
        Ok(sse_server) => sse_server,
        Err(e) => {
            tracing::error!("Failed to bind SSE server on {addr}: {}", e);
            return EXIT_WARNING;
        }
    };

    tracing::info!("MCP SSE server listening on {addr}");
    let ct = sse_server.with_service(move || server.clone());

    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
    ct.cancel();

    EXIT_SUCCESS
}

async fn serve_http(server: McpServer, host: &str, port: u16) -> i32 {
    use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
    use rmcp::transport::streamable_http_server::StreamableHttpService;

    let Some(addr) = resolve_addr(host, port) else {
        tracing::error!("Cannot resolve bind address {host}:{port}");
        return EXIT_ERROR;
    };

    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let router = axum::Router::new().nest_service("/mcp", service);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind HTTP server on {addr}: {}", e);
            return EXIT_WARNING;
        }
    };

    tracing::info!("MCP HTTP server listening on {addr}");
    let result = axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await;

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("MCP HTTP server error: {}", e);
            EXIT_WARNING
        }
    }
}
