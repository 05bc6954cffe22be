use std::process;

mod cli;
mod exit_codes;
mod serve;

use clap::CommandFactory;
use cli::{Cli, Commands, TransportMode};
use exit_codes::EXIT_SUCCESS;

#[tokio::main]
async fn main() {
    // Pick up JIRA_* variables from a .env file if present
    let _ = dotenv::dotenv();

    let cli = Cli::parse_args();

    // Fast path for help - avoid expensive initialization
    if cli.command.is_none() {
        Cli::command().print_help().expect("Failed to print help");
        process::exit(EXIT_SUCCESS);
    }

    use tracing::Level;

    // In stdio MCP mode stdout carries the protocol, so logs must go
    // elsewhere; detect it the same way MCP clients invoke us.
    use is_terminal::IsTerminal;
    let is_mcp_mode = matches!(
        cli.command,
        Some(Commands::Serve {
            transport: TransportMode::Stdio,
            ..
        })
    ) && !std::io::stdin().is_terminal();

    let log_level = if cli.quiet {
        Level::ERROR
    } else if cli.debug || is_mcp_mode {
        Level::DEBUG
    } else if cli.verbose {
        Level::TRACE
    } else {
        Level::INFO
    };

    if is_mcp_mode {
        // In MCP mode, write logs to ~/.jira-context/mcp.log for debugging
        use std::fs;
        use std::path::PathBuf;

        let log_dir = if let Some(home) = dirs::home_dir() {
            home.join(".jira-context")
        } else {
            PathBuf::from(".jira-context")
        };

        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create log directory: {e}");
        }

        let log_file = log_dir.join("mcp.log");
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
        {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_writer(file)
                    .with_max_level(log_level)
                    .with_ansi(false) // No color codes in file
                    .init();
            }
            Err(e) => {
                // Fallback to stderr if file logging fails
                eprintln!("Failed to open log file, using stderr: {e}");
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_max_level(log_level)
                    .init();
            }
        }
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(log_level)
            .init();
    }

    let exit_code = match cli.command {
        Some(Commands::Serve {
            transport,
            host,
            port,
        }) => {
            tracing::info!("Starting MCP server ({transport:?} transport)");
            serve::run_server(transport, &host, port).await
        }
        None => {
            // This case is handled early above for performance
            unreachable!()
        }
    };

    process::exit(exit_code);
}
