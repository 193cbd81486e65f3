//! Speaker roster tools.
//!
//! Validates tool arguments, builds the speaker models, delegates to the
//! repository and renders the text reports returned to the assistant.

use crate::domain::{Choice, ContactStatus, FieldSpecialty, Priority, SpeakerId, ValidationError};
use crate::error::ToolResult;
use crate::models::{NewSpeaker, SpeakerFilter, SpeakerUpdate};
use crate::repositories::SpeakerRepository;
use crate::tools::format;
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;

/// Parameters for adding a speaker.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct AddSpeakerParams {
    /// Speaker's full name (required)
    pub name: String,

    /// Primary field: "Drug Discovery & AI", "Clinical/Medical AI", "Genomics & Biotech",
    /// "Healthcare AI/ML", "Regulatory Science", "Real World Data/Evidence",
    /// "Bioinformatics", "Medical Imaging AI", "NLP in Healthcare" or "Other"
    #[serde(default)]
    pub field_specialty: Option<String>,

    /// University or company name
    #[serde(default)]
    pub affiliation: Option<String>,

    /// Job title
    #[serde(default)]
    pub position: Option<String>,

    /// LinkedIn profile URL
    #[serde(default)]
    pub linkedin_url: Option<String>,

    /// Topics they could speak on
    #[serde(default)]
    pub potential_topics: Option<Vec<String>>,

    /// Contact status: "Not Contacted" (default), "Contacted", "In Discussion",
    /// "Confirmed", "Declined", "Maybe Later" or "No Response"
    #[serde(default)]
    pub contact_status: Option<String>,

    /// Bio summary and research findings
    #[serde(default)]
    pub research_notes: Option<String>,

    /// Contact email address
    #[serde(default)]
    pub email: Option<String>,

    /// Priority level: "High", "Medium" or "Low"
    #[serde(default)]
    pub priority: Option<String>,
}

/// Parameters for searching speakers. All criteria are optional and combined with AND.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SearchSpeakersParams {
    /// Filter by name (partial match)
    #[serde(default)]
    pub name: Option<String>,

    /// Filter by field/specialty
    #[serde(default)]
    pub field_specialty: Option<String>,

    /// Filter by affiliation (partial match)
    #[serde(default)]
    pub affiliation: Option<String>,

    /// Filter by contact status
    #[serde(default)]
    pub contact_status: Option<String>,

    /// Filter by priority level
    #[serde(default)]
    pub priority: Option<String>,
}

/// Parameters for updating a speaker. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct UpdateSpeakerParams {
    /// Notion page ID (or page URL) of the speaker to update
    pub speaker_id: String,

    /// New name
    #[serde(default)]
    pub name: Option<String>,

    /// New field/specialty
    #[serde(default)]
    pub field_specialty: Option<String>,

    /// New affiliation
    #[serde(default)]
    pub affiliation: Option<String>,

    /// New position
    #[serde(default)]
    pub position: Option<String>,

    /// New LinkedIn URL, empty string to clear
    #[serde(default)]
    pub linkedin_url: Option<String>,

    /// New list of potential topics, replaces the existing list
    #[serde(default)]
    pub potential_topics: Option<Vec<String>>,

    /// New contact status
    #[serde(default)]
    pub contact_status: Option<String>,

    /// New research notes
    #[serde(default)]
    pub research_notes: Option<String>,

    /// New email, empty string to clear
    #[serde(default)]
    pub email: Option<String>,

    /// New priority level
    #[serde(default)]
    pub priority: Option<String>,
}

/// Parameters for listing speakers.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListSpeakersParams {
    /// Maximum number of speakers to return (default: 50, negative values count as 0)
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Parameters naming a single speaker.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SpeakerIdParams {
    /// Notion page ID (or page URL) of the speaker
    pub speaker_id: String,
}

/// Speaker tools backed by a repository.
pub struct SpeakerTools {
    repo: Arc<dyn SpeakerRepository>,
    default_list_limit: usize,
}

impl SpeakerTools {
    /// Create new speaker tools.
    ///
    /// # Arguments
    /// * `repo` - SpeakerRepository for speaker data access
    /// * `default_list_limit` - Limit used by `list_speakers` when none is given
    pub fn new(repo: Arc<dyn SpeakerRepository>, default_list_limit: usize) -> Self {
        Self {
            repo,
            default_list_limit,
        }
    }

    /// Add a new speaker and report its ID and URL.
    pub async fn add_speaker(&self, params: AddSpeakerParams) -> ToolResult<String> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        let speaker = NewSpeaker {
            name: name.to_string(),
            field_specialty: FieldSpecialty::parse_optional(params.field_specialty.as_deref())?,
            affiliation: params.affiliation,
            position: params.position,
            linkedin_url: params.linkedin_url,
            potential_topics: params.potential_topics.unwrap_or_default(),
            contact_status: ContactStatus::parse_optional(params.contact_status.as_deref())?
                .unwrap_or_default(),
            research_notes: params.research_notes,
            email: params.email,
            priority: Priority::parse_optional(params.priority.as_deref())?,
        };

        tracing::info!("Adding speaker: {}", speaker.name);
        let created = self.repo.create(&speaker).await?;
        tracing::info!("Speaker added with id: {}", created.id);

        Ok(format::added(&created))
    }

    /// Search speakers by any combination of criteria.
    pub async fn search_speakers(&self, params: SearchSpeakersParams) -> ToolResult<String> {
        let filter = SpeakerFilter {
            name: params.name,
            field_specialty: FieldSpecialty::parse_optional(params.field_specialty.as_deref())?,
            affiliation: params.affiliation,
            contact_status: ContactStatus::parse_optional(params.contact_status.as_deref())?,
            priority: Priority::parse_optional(params.priority.as_deref())?,
        };

        tracing::debug!("Searching speakers with filter: {:?}", filter);
        let speakers = self.repo.search(&filter).await?;
        tracing::info!("Search returned {} speaker(s)", speakers.len());

        Ok(format::search_results(&speakers))
    }

    /// Update the supplied fields of an existing speaker.
    pub async fn update_speaker(&self, params: UpdateSpeakerParams) -> ToolResult<String> {
        let id = SpeakerId::new(params.speaker_id)?;

        if matches!(params.name.as_deref(), Some(name) if name.trim().is_empty()) {
            return Err(ValidationError::EmptyName.into());
        }

        let update = SpeakerUpdate {
            name: params.name.map(|name| name.trim().to_string()),
            field_specialty: FieldSpecialty::parse_optional(params.field_specialty.as_deref())?,
            affiliation: params.affiliation,
            position: params.position,
            linkedin_url: params.linkedin_url,
            potential_topics: params.potential_topics,
            contact_status: ContactStatus::parse_optional(params.contact_status.as_deref())?,
            research_notes: params.research_notes,
            email: params.email,
            priority: Priority::parse_optional(params.priority.as_deref())?,
        };

        tracing::info!("Updating speaker: {}", id);
        let updated = self.repo.update(id.as_str(), &update).await?;

        Ok(format::updated(&updated))
    }

    /// List speakers grouped by contact status.
    pub async fn list_speakers(&self, params: ListSpeakersParams) -> ToolResult<String> {
        let limit = match params.limit {
            Some(requested) => usize::try_from(requested.max(0)).unwrap_or(usize::MAX),
            None => self.default_list_limit,
        };

        let speakers = self.repo.list(limit).await?;
        tracing::info!("Listed {} speaker(s) (limit {})", speakers.len(), limit);

        Ok(format::speaker_list(&speakers))
    }

    /// Full details of one speaker.
    pub async fn get_speaker_details(&self, params: SpeakerIdParams) -> ToolResult<String> {
        let id = SpeakerId::new(params.speaker_id)?;
        let speaker = self.repo.get(id.as_str()).await?;

        Ok(format::speaker_details(&speaker))
    }

    /// Check the database connection. Failures are part of the report.
    pub async fn test_connection(&self) -> String {
        let status = self.repo.test_connection().await;
        tracing::info!("Connection test: connected={}", status.is_connected());

        format::connection(&status)
    }
}
