//! MCP server implementation for the speaker tracker.
//!
//! This module provides the MCP protocol server that exposes the speaker
//! roster to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::SpeakerTrackerServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the speaker tracker MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns when
/// the client disconnects.
pub async fn run_server(server: SpeakerTrackerServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
