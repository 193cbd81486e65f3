//! Speaker model representing one row of the speakers database.

use crate::domain::{ContactStatus, FieldSpecialty, Priority};

/// A speaker as stored in Notion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Speaker {
    /// Notion page ID
    pub id: String,

    /// Notion page URL
    pub url: Option<String>,

    /// Speaker's full name
    pub name: String,

    /// Primary field/specialty
    pub field_specialty: Option<FieldSpecialty>,

    /// University or company
    pub affiliation: Option<String>,

    /// Job title
    pub position: Option<String>,

    /// LinkedIn profile URL
    pub linkedin_url: Option<String>,

    /// Topics they could speak on
    pub potential_topics: Vec<String>,

    /// Current contact status
    pub contact_status: ContactStatus,

    /// Bio summary and research findings
    pub research_notes: Option<String>,

    /// Contact email address
    pub email: Option<String>,

    /// Priority level for outreach
    pub priority: Option<Priority>,
}

/// Input for creating a speaker. Only `name` is required.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewSpeaker {
    pub name: String,
    pub field_specialty: Option<FieldSpecialty>,
    pub affiliation: Option<String>,
    pub position: Option<String>,
    pub linkedin_url: Option<String>,
    pub potential_topics: Vec<String>,
    pub contact_status: ContactStatus,
    pub research_notes: Option<String>,
    pub email: Option<String>,
    pub priority: Option<Priority>,
}

impl NewSpeaker {
    /// Create a new speaker input with only a name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Partial update for an existing speaker.
///
/// `None` always means "leave the stored value untouched"; there is no way
/// to clear a property by omission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpeakerUpdate {
    pub name: Option<String>,
    pub field_specialty: Option<FieldSpecialty>,
    pub affiliation: Option<String>,
    pub position: Option<String>,
    pub linkedin_url: Option<String>,
    pub potential_topics: Option<Vec<String>>,
    pub contact_status: Option<ContactStatus>,
    pub research_notes: Option<String>,
    pub email: Option<String>,
    pub priority: Option<Priority>,
}

impl SpeakerUpdate {
    /// True when no field would be sent.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A creation always writes name, topics and status, so absent topics
/// become an explicit empty list.
impl From<&NewSpeaker> for SpeakerUpdate {
    fn from(speaker: &NewSpeaker) -> Self {
        Self {
            name: Some(speaker.name.clone()),
            field_specialty: speaker.field_specialty,
            affiliation: speaker.affiliation.clone(),
            position: speaker.position.clone(),
            linkedin_url: speaker.linkedin_url.clone(),
            potential_topics: Some(speaker.potential_topics.clone()),
            contact_status: Some(speaker.contact_status),
            research_notes: speaker.research_notes.clone(),
            email: speaker.email.clone(),
            priority: speaker.priority,
        }
    }
}

/// Search criteria, combined with AND.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpeakerFilter {
    /// Name contains
    pub name: Option<String>,
    pub field_specialty: Option<FieldSpecialty>,
    /// Affiliation contains
    pub affiliation: Option<String>,
    pub contact_status: Option<ContactStatus>,
    pub priority: Option<Priority>,
}

impl SpeakerFilter {
    /// Name fragment to match, `None` when absent or blank.
    pub fn name_query(&self) -> Option<&str> {
        self.name.as_deref().filter(|v| !v.is_empty())
    }

    /// Affiliation fragment to match, `None` when absent or blank.
    pub fn affiliation_query(&self) -> Option<&str> {
        self.affiliation.as_deref().filter(|v| !v.is_empty())
    }

    /// True when no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.name_query().is_none()
            && self.affiliation_query().is_none()
            && self.field_specialty.is_none()
            && self.contact_status.is_none()
            && self.priority.is_none()
    }
}
