//! MCP server launcher
//!
//! Starts the MCP server over stdio for Claude Code integration.

use anyhow::{Context, Result};
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};

use crate::config::{interpolate_config, load_config};
use crate::mcp::MakehubServer;

/// Run the MCP server over stdio.
///
/// Uses stdin/stdout for the protocol transport, which is the standard
/// transport for Claude Code MCP servers; logging goes to stderr.
///
/// # Arguments
/// * `config_path` - Optional path to a config file override
///
/// # Returns
/// * `Ok(())` - Server ran successfully and was shut down
/// * `Err(e)` - Server failed to start or encountered an error
pub async fn run_mcp_server(config_path: Option<&str>) -> Result<()> {
    // Load configuration once; the credential is immutable for the
    // process lifetime
    let mut config = load_config(config_path).context("Failed to load configuration")?;
    interpolate_config(&mut config);

    let server = MakehubServer::with_config(config);

    // Create stdio transport - tuple of (reader, writer)
    let transport = (stdin(), stdout());

    let service = server.serve(transport).await?;
    tracing::info!("makehub MCP server started");

    // Wait for completion
    service.waiting().await?;

    Ok(())
}
