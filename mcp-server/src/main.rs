//! Employee MCP Server
//!
//! This MCP server is the remote client of the employee API. It reads its
//! target from environment variables and exposes tools for:
//! - Listing and searching employees
//! - Adding, updating and deleting records
//! - Calculating prorated salary

mod client;
mod server;

use anyhow::Result;
use client::ClientConfig;
use rmcp::ServiceExt;
use server::EmployeeServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is used for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env()?;
    tracing::info!(base_url = %config.base_url, timeout = ?config.timeout, "Starting employee MCP server");

    // Create the server with HTTP client
    let server = EmployeeServer::new(&config)?;

    // Serve over stdio - pass as tuple (stdin, stdout)
    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let service = server.serve(transport).await?;

    // Wait for shutdown
    service.waiting().await?;

    Ok(())
}
