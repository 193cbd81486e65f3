use crate::client::{AsyncNotionClient, MAX_PAGE_SIZE};
use crate::error::{NotionApiError, NotionApiResult};
use crate::mapper;
use crate::models::{ConnectionStatus, NewSpeaker, Speaker, SpeakerFilter, SpeakerUpdate};
use crate::repositories::traits::SpeakerRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Speaker repository implementation backed by a Notion database.
///
/// Applies the mapper on both ends of every call: speaker models go out
/// as property bags, pages come back as speakers.
pub struct NotionSpeakerRepository {
    client: Arc<dyn AsyncNotionClient>,
}

impl NotionSpeakerRepository {
    /// Create a new NotionSpeakerRepository with the given client.
    pub fn new(client: Arc<dyn AsyncNotionClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SpeakerRepository for NotionSpeakerRepository {
    async fn create(&self, speaker: &NewSpeaker) -> NotionApiResult<Speaker> {
        let properties = mapper::to_properties(&SpeakerUpdate::from(speaker));
        let page = self.client.create_page(&properties).await?;
        Ok(mapper::speaker_from_page(&page))
    }

    async fn get(&self, id: &str) -> NotionApiResult<Speaker> {
        let page = self.client.retrieve_page(id).await?;
        if page.archived || page.in_trash {
            return Err(NotionApiError::NotFound(format!(
                "Speaker {} has been archived",
                id
            )));
        }
        Ok(mapper::speaker_from_page(&page))
    }

    async fn update(&self, id: &str, update: &SpeakerUpdate) -> NotionApiResult<Speaker> {
        if update.is_empty() {
            tracing::debug!("No fields to update for {}, fetching current state", id);
            return self.get(id).await;
        }

        let properties = mapper::to_properties(update);
        let page = self.client.update_page(id, &properties).await?;
        Ok(mapper::speaker_from_page(&page))
    }

    async fn search(&self, filter: &SpeakerFilter) -> NotionApiResult<Vec<Speaker>> {
        let filter = mapper::build_filter(filter);
        let response = self
            .client
            .query_database(filter.as_ref(), MAX_PAGE_SIZE, None)
            .await?;

        Ok(response
            .results
            .iter()
            .map(mapper::speaker_from_page)
            .collect())
    }

    async fn list(&self, limit: usize) -> NotionApiResult<Vec<Speaker>> {
        let mut speakers: Vec<Speaker> = Vec::new();
        let mut cursor: Option<String> = None;

        while speakers.len() < limit {
            let page_size = (limit - speakers.len()).min(MAX_PAGE_SIZE);
            let response = self
                .client
                .query_database(None, page_size, cursor.as_deref())
                .await?;

            speakers.extend(response.results.iter().map(mapper::speaker_from_page));

            match response.next_cursor {
                Some(next) if response.has_more => cursor = Some(next),
                _ => break,
            }
        }

        speakers.truncate(limit);
        Ok(speakers)
    }

    async fn archive(&self, id: &str) -> NotionApiResult<()> {
        self.client.archive_page(id).await?;
        Ok(())
    }

    async fn test_connection(&self) -> ConnectionStatus {
        match self.client.retrieve_database().await {
            Ok(info) => ConnectionStatus::Connected {
                database_title: if info.title.is_empty() {
                    "Untitled".to_string()
                } else {
                    info.title
                },
                database_id: self.client.database_id().to_string(),
            },
            Err(e) => {
                tracing::warn!("Connection test failed: {}", e);
                ConnectionStatus::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}
