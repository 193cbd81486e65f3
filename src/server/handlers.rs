//! MCP tool handlers for the speaker tracker.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.
//! Every tool answers with text; failures are rendered into the text rather
//! than surfaced as protocol errors.

use crate::error::ToolResult;
use crate::repositories::SpeakerRepository;
use crate::tools::format::{
    self, ADD_ERROR_PREFIX, DETAILS_ERROR_PREFIX, LIST_ERROR_PREFIX, SEARCH_ERROR_PREFIX,
    UPDATE_ERROR_PREFIX,
};
use crate::tools::{
    research, AddSpeakerParams, ListSpeakersParams, ResearchSummaryParams, SearchSpeakersParams,
    SpeakerIdParams, SpeakerTools, UpdateSpeakerParams,
};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use std::sync::Arc;

/// The MCP server that exposes the speaker roster tools.
#[derive(Clone)]
pub struct SpeakerTrackerServer {
    tools: Arc<SpeakerTools>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for SpeakerTrackerServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "speaker-tracker-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: Some("SAPA Speaker Tracker".into()),
                website_url: None,
            },
            instructions: Some("MCP server for the SAPA speaker database in Notion - add, search, update and review prospective speakers.".into()),
        }
    }
}

/// Wrap a tool outcome as a text result, rendering failures under `prefix`.
fn text_result(prefix: &str, outcome: ToolResult<String>) -> CallToolResult {
    let text = match outcome {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Tool call failed ({:?}): {}", e.kind(), e);
            format::render_error(prefix, &e)
        }
    };
    CallToolResult::success(vec![Content::text(text)])
}

// Tool router implementation
#[tool_router]
impl SpeakerTrackerServer {
    /// Create a new speaker tracker server.
    pub fn new(repo: Arc<dyn SpeakerRepository>, default_list_limit: usize) -> Self {
        Self {
            tools: Arc::new(SpeakerTools::new(repo, default_list_limit)),
            tool_router: Self::tool_router(),
        }
    }

    /// Add a new speaker to the database.
    #[tool(
        description = "Add a new speaker to the SAPA speaker database. Only name is required; contact_status defaults to \"Not Contacted\". Returns the new speaker's Notion page ID and URL."
    )]
    async fn add_speaker(
        &self,
        params: Parameters<AddSpeakerParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: add_speaker called");
        let outcome = self.tools.add_speaker(params.0).await;
        Ok(text_result(ADD_ERROR_PREFIX, outcome))
    }

    /// Search for speakers with optional filters.
    #[tool(
        description = "Search for speakers in the database. Name and affiliation match partially; field_specialty, contact_status and priority match exactly. All supplied filters must match."
    )]
    async fn search_speakers(
        &self,
        params: Parameters<SearchSpeakersParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: search_speakers called");
        let outcome = self.tools.search_speakers(params.0).await;
        Ok(text_result(SEARCH_ERROR_PREFIX, outcome))
    }

    /// Update an existing speaker's information.
    #[tool(
        description = "Update an existing speaker's information. Only the supplied fields are changed; potential_topics replaces the whole list."
    )]
    async fn update_speaker(
        &self,
        params: Parameters<UpdateSpeakerParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: update_speaker called");
        let outcome = self.tools.update_speaker(params.0).await;
        Ok(text_result(UPDATE_ERROR_PREFIX, outcome))
    }

    /// List speakers grouped by contact status.
    #[tool(
        description = "List all speakers in the database grouped by contact status (default limit: 50)"
    )]
    async fn list_speakers(
        &self,
        params: Parameters<ListSpeakersParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: list_speakers called");
        let outcome = self.tools.list_speakers(params.0).await;
        Ok(text_result(LIST_ERROR_PREFIX, outcome))
    }

    /// Get full details of a specific speaker.
    #[tool(description = "Get full details of a specific speaker by Notion page ID")]
    async fn get_speaker_details(
        &self,
        params: Parameters<SpeakerIdParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: get_speaker_details called");
        let outcome = self.tools.get_speaker_details(params.0).await;
        Ok(text_result(DETAILS_ERROR_PREFIX, outcome))
    }

    /// Format research findings for review before adding a speaker.
    #[tool(
        description = "Format web research results into a structured summary for review before adding to the database. Use this after researching a potential speaker to present findings to the user for approval."
    )]
    async fn prepare_research_summary(
        &self,
        params: Parameters<ResearchSummaryParams>,
    ) -> Result<CallToolResult, McpError> {
        let summary = research::prepare_research_summary(&params.0);
        Ok(CallToolResult::success(vec![Content::text(summary)]))
    }

    /// Test the connection to the Notion database.
    #[tool(description = "Test the connection to the Notion database")]
    async fn test_connection(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: test_connection called");
        let report = self.tools.test_connection().await;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }
}
