//! Gantt MCP Server - Main Entry Point
//!
//! This is the main entry point for the Gantt MCP server application.
//! The actual implementation is in the `gantt_mcp` library.

use anyhow::Result;
use clap::Parser;
use gantt_mcp::{GanttServerHandler, GapPolicy};
use mcp_attr::server::serve_stdio;
use tracing_subscriber::EnvFilter;

/// Gantt MCP Server - Chinese natural-language project scheduling via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Chain tasks back to back instead of keeping a one-day buffer
    #[arg(long)]
    strict: bool,

    /// Start with the built-in sample project loaded
    #[arg(long)]
    sample: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the MCP protocol.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let policy = if args.strict {
        GapPolicy::Strict
    } else {
        GapPolicy::Buffer
    };
    let handler = GanttServerHandler::new(policy, args.sample);
    serve_stdio(handler).await?;
    Ok(())
}
