//! Ghost MCP Server
//!
//! Standalone MCP server exposing the Ghost Admin API over stdio.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};
use std::sync::Arc;

use ghost_mcp::GhostMcpServer;
use ghost_mcp_client::GhostClient;
use ghost_mcp_core::{ConfigHolder, GhostConfig};

/// Ghost MCP server - manage a Ghost site over the Model Context Protocol
#[derive(Parser, Debug)]
#[command(name = "ghost-mcp")]
#[command(about = "MCP server for the Ghost Admin API", long_about = None)]
struct Args {
    /// Configuration file path (falls back to GHOST_MCP_CONFIG, then
    /// GHOST_* environment variables)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logging goes to stderr: stdout carries the stdio transport.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ghost_mcp=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GhostConfig::load(args.config.as_deref())?;
    config.validate()?;

    tracing::info!(
        url = %config.api_url,
        version = %config.api_version,
        "starting ghost-mcp server"
    );

    let holder = ConfigHolder::with_config(config);
    let client = Arc::new(GhostClient::new(holder)?);

    let service = GhostMcpServer::new(client).serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
