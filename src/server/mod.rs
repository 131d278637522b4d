//! MCP server implementation for the Guni SMS gateway.
//!
//! This module provides the MCP protocol server that exposes SMS and MMS
//! sending to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::GuniMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the Guni MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns once the
/// client disconnects.
pub async fn run_server(server: GuniMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
