//! Speaker Tracker MCP Server - Main entry point
//!
//! Runs the Model Context Protocol server for the SAPA speaker database
//! over stdio.

use anyhow::Result;
use speaker_tracker_mcp::client::{AsyncNotionClient, AsyncNotionClientImpl};
use speaker_tracker_mcp::repositories::{NotionSpeakerRepository, SpeakerRepository};
use speaker_tracker_mcp::{Config, NotionClient, SpeakerTrackerServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the log filter
    let config = Config::from_env();

    // stderr only; stdout carries the MCP protocol
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration ({:?}): {}", e.kind(), e);
            return Err(e.into());
        }
    };

    info!(
        "Starting Speaker Tracker MCP Server with API URL: {} (database {})",
        config.notion_api_url, config.notion_database_id
    );

    let sync_client = NotionClient::new(&config);
    let client = Arc::new(AsyncNotionClientImpl::new(sync_client)) as Arc<dyn AsyncNotionClient>;
    let repo = Arc::new(NotionSpeakerRepository::new(client)) as Arc<dyn SpeakerRepository>;

    let server = SpeakerTrackerServer::new(repo, config.list_default_limit);

    info!("Starting MCP server with stdio transport");
    speaker_tracker_mcp::server::run_server(server).await?;

    info!("Speaker Tracker MCP Server shutdown complete");
    Ok(())
}
