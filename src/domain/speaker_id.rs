//! SpeakerId value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static TRAILING_PAGE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([0-9a-f]{32})$").expect("valid page id regex"));

/// A type-safe wrapper for Notion page IDs identifying a speaker.
///
/// Accepts a bare page ID, a dashed UUID, or a full page URL copied from
/// the Notion UI. A side-peek URL (`<database>?v=<view>&p=<page>`) names the
/// page in its `p` parameter; otherwise anything ending in 32 hex digits is
/// normalised to the bare ID. Other non-empty strings are kept as-is.
///
/// # Example
///
/// ```
/// use speaker_tracker_mcp::domain::SpeakerId;
///
/// let id = SpeakerId::new("https://www.notion.so/Jane-Doe-0123456789abcdef0123456789abcdef?pvs=4").unwrap();
/// assert_eq!(id.as_str(), "0123456789abcdef0123456789abcdef");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpeakerId(String);

impl SpeakerId {
    /// Create a new SpeakerId, validating that it's not blank.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` if the provided ID is empty or whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(Self::normalize(trimmed)))
    }

    fn normalize(raw: &str) -> String {
        if let Some(page_id) = Self::peek_page_id(raw) {
            return page_id;
        }

        let without_query = raw.split(['?', '#']).next().unwrap_or(raw);
        let last_segment = without_query
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(without_query);
        let compact: String = last_segment.chars().filter(|c| *c != '-').collect();

        match TRAILING_PAGE_ID.captures(&compact) {
            Some(caps) => caps[1].to_lowercase(),
            None => raw.to_string(),
        }
    }

    /// The `p` query parameter of a side-peek URL, when it holds a page ID.
    fn peek_page_id(raw: &str) -> Option<String> {
        let (_, query) = raw.split_once('?')?;
        let query = query.split('#').next().unwrap_or(query);

        query
            .split('&')
            .filter_map(|pair| pair.strip_prefix("p="))
            .map(|value| value.replace('-', ""))
            .find(|value| value.len() == 32 && value.chars().all(|c| c.is_ascii_hexdigit()))
            .map(|value| value.to_lowercase())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpeakerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
