use crate::error::NotionApiResult;
use crate::models::*;
use async_trait::async_trait;

/// Repository for managing speakers.
///
/// Provides abstraction over speaker storage and retrieval,
/// enabling different implementations (Notion client, mock).
#[async_trait]
pub trait SpeakerRepository: Send + Sync {
    /// Create a speaker and return it with its assigned ID and URL.
    async fn create(&self, speaker: &NewSpeaker) -> NotionApiResult<Speaker>;

    /// Retrieve a single speaker by ID. Archived speakers are not found.
    async fn get(&self, id: &str) -> NotionApiResult<Speaker>;

    /// Apply a partial update. An empty update is a plain `get`.
    async fn update(&self, id: &str, update: &SpeakerUpdate) -> NotionApiResult<Speaker>;

    /// Find speakers matching every criterion in `filter`.
    async fn search(&self, filter: &SpeakerFilter) -> NotionApiResult<Vec<Speaker>>;

    /// List up to `limit` speakers, following pagination cursors.
    async fn list(&self, limit: usize) -> NotionApiResult<Vec<Speaker>>;

    /// Archive (soft delete) a speaker.
    async fn archive(&self, id: &str) -> NotionApiResult<()>;

    /// Check that the database is reachable. Never fails; errors are reported in the result.
    async fn test_connection(&self) -> ConnectionStatus;
}
