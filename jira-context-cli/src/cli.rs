use clap::{Parser, Subcommand, ValueEnum};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum TransportMode {
    Stdio,
    Http,
    Sse,
}

#[derive(Parser, Debug)]
#[command(name = "jira-context")]
#[command(version)]
#[command(about = "An MCP server exposing Jira operations as tools")]
#[command(long_about = "
jira-context is an MCP (Model Context Protocol) server that exposes a
Jira instance's operations as tools: reading and searching issues,
project metadata, users, boards and sprints, and - when write mode is
enabled - issue mutation.

Environment variables:
  JIRA_URL            Base URL of the Jira instance (required)
  JIRA_API_TOKEN      Personal access token (required)
  JIRA_ENABLE_WRITE   'true' to expose mutating tools (default: false)

Example usage:
  jira-context serve                            # Run over stdio
  jira-context serve --transport http           # Streamable HTTP server
  jira-context serve --transport sse --port 8080
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server (default when invoked via stdio)
    #[command(long_about = "
Runs jira-context as an MCP server. The default stdio transport is what
MCP clients such as Claude Code spawn directly; the http and sse
transports bind a port and serve the same tool catalogue over the
network.

Write-capable tools are only registered when JIRA_ENABLE_WRITE=true in
the environment at startup.

Example:
  jira-context serve
  jira-context serve --transport http --host 0.0.0.0 --port 3000
")]
    Serve {
        /// Transport mode: stdio (default), http (streamable HTTP), or
        /// sse (deprecated HTTP event stream)
        #[arg(short, long, value_enum, default_value = "stdio")]
        transport: TransportMode,

        /// Host to bind to in the HTTP modes
        #[arg(long, default_value = "localhost")]
        host: String,

        /// Port to bind to in the HTTP modes
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["jira-context", "serve"]).unwrap();
        match cli.command {
            Some(Commands::Serve {
                transport,
                host,
                port,
            }) => {
                assert_eq!(transport, TransportMode::Stdio);
                assert_eq!(host, "localhost");
                assert_eq!(port, 3000);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_serve_http_with_host_and_port() {
        let cli = Cli::try_parse_from([
            "jira-context",
            "serve",
            "--transport",
            "http",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Serve {
                transport,
                host,
                port,
            }) => {
                assert_eq!(transport, TransportMode::Http);
                assert_eq!(host, "0.0.0.0");
                assert_eq!(port, 8080);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_transport() {
        let result = Cli::try_parse_from(["jira-context", "serve", "--transport", "websocket"]);
        assert!(result.is_err());
    }
}
