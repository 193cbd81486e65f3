use async_trait::async_trait;
use speaker_tracker_mcp::error::{NotionApiError, NotionApiResult};
use speaker_tracker_mcp::models::{
    ConnectionStatus, NewSpeaker, Speaker, SpeakerFilter, SpeakerUpdate,
};
use speaker_tracker_mcp::repositories::SpeakerRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock speaker repository for testing.
///
/// Speakers are kept in insertion order so listings are deterministic.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockSpeakerRepository {
    speakers: Arc<Mutex<Vec<Speaker>>>,
    last_filter: Arc<Mutex<Option<SpeakerFilter>>>,
    last_update: Arc<Mutex<Option<SpeakerUpdate>>>,
    last_created: Arc<Mutex<Option<NewSpeaker>>>,
    failure: Arc<Mutex<Option<NotionApiError>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockSpeakerRepository {
    pub fn new() -> Self {
        Self {
            speakers: Arc::new(Mutex::new(Vec::new())),
            last_filter: Arc::new(Mutex::new(None)),
            last_update: Arc::new(Mutex::new(None)),
            last_created: Arc::new(Mutex::new(None)),
            failure: Arc::new(Mutex::new(None)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn add_speaker(&self, speaker: Speaker) {
        self.speakers.lock().unwrap().push(speaker);
    }

    /// Make the next call fail with `error`.
    pub fn fail_next(&self, error: NotionApiError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn last_filter(&self) -> Option<SpeakerFilter> {
        self.last_filter.lock().unwrap().clone()
    }

    pub fn last_update(&self) -> Option<SpeakerUpdate> {
        self.last_update.lock().unwrap().clone()
    }

    pub fn last_created(&self) -> Option<NewSpeaker> {
        self.last_created.lock().unwrap().clone()
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    pub fn total_calls(&self) -> usize {
        self.call_counts.lock().unwrap().values().sum()
    }

    fn track_call(&self, method: &str) -> NotionApiResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        match self.failure.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn find(&self, id: &str) -> NotionApiResult<Speaker> {
        self.speakers
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| NotionApiError::NotFound(format!("Speaker {} not found", id)))
    }
}

impl Default for MockSpeakerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeakerRepository for MockSpeakerRepository {
    async fn create(&self, speaker: &NewSpeaker) -> NotionApiResult<Speaker> {
        self.track_call("create")?;
        *self.last_created.lock().unwrap() = Some(speaker.clone());

        let mut speakers = self.speakers.lock().unwrap();
        let id = format!("speaker-{}", speakers.len() + 1);
        let created = Speaker {
            url: Some(format!("https://www.notion.so/{}", id)),
            id,
            name: speaker.name.clone(),
            field_specialty: speaker.field_specialty,
            affiliation: speaker.affiliation.clone(),
            position: speaker.position.clone(),
            linkedin_url: speaker.linkedin_url.clone(),
            potential_topics: speaker.potential_topics.clone(),
            contact_status: speaker.contact_status,
            research_notes: speaker.research_notes.clone(),
            email: speaker.email.clone(),
            priority: speaker.priority,
        };
        speakers.push(created.clone());
        Ok(created)
    }

    async fn get(&self, id: &str) -> NotionApiResult<Speaker> {
        self.track_call("get")?;
        self.find(id)
    }

    async fn update(&self, id: &str, update: &SpeakerUpdate) -> NotionApiResult<Speaker> {
        self.track_call("update")?;
        *self.last_update.lock().unwrap() = Some(update.clone());

        let mut speakers = self.speakers.lock().unwrap();
        let speaker = speakers
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| NotionApiError::NotFound(format!("Speaker {} not found", id)))?;

        if let Some(name) = &update.name {
            speaker.name = name.clone();
        }
        if let Some(status) = update.contact_status {
            speaker.contact_status = status;
        }
        if let Some(priority) = update.priority {
            speaker.priority = Some(priority);
        }
        if let Some(affiliation) = &update.affiliation {
            speaker.affiliation = Some(affiliation.clone());
        }
        Ok(speaker.clone())
    }

    async fn search(&self, filter: &SpeakerFilter) -> NotionApiResult<Vec<Speaker>> {
        self.track_call("search")?;
        *self.last_filter.lock().unwrap() = Some(filter.clone());

        let speakers = self.speakers.lock().unwrap();
        Ok(speakers
            .iter()
            .filter(|s| {
                filter
                    .name
                    .as_deref()
                    .map_or(true, |name| s.name.contains(name))
                    && filter
                        .contact_status
                        .map_or(true, |status| s.contact_status == status)
                    && filter.priority.map_or(true, |p| s.priority == Some(p))
            })
            .cloned()
            .collect())
    }

    async fn list(&self, limit: usize) -> NotionApiResult<Vec<Speaker>> {
        self.track_call("list")?;
        let speakers = self.speakers.lock().unwrap();
        Ok(speakers.iter().take(limit).cloned().collect())
    }

    async fn archive(&self, id: &str) -> NotionApiResult<()> {
        self.track_call("archive")?;
        self.speakers.lock().unwrap().retain(|s| s.id != id);
        Ok(())
    }

    async fn test_connection(&self) -> ConnectionStatus {
        match self.track_call("test_connection") {
            Ok(()) => ConnectionStatus::Connected {
                database_title: "SAPA Speakers".to_string(),
                database_id: "db-mock".to_string(),
            },
            Err(e) => ConnectionStatus::Failed {
                error: e.to_string(),
            },
        }
    }
}
