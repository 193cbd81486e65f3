//! Translation between speaker models and Notion page properties.
//!
//! This is the only module that knows the database schema: property names,
//! property types, and the filter shapes used to query them. Outbound
//! mapping emits a key only for fields that are present; inbound mapping is
//! total and never fails on odd property values.

use crate::client::Page;
use crate::domain::{Choice, ContactStatus, FieldSpecialty, Priority};
use crate::models::{Speaker, SpeakerFilter, SpeakerUpdate};
use serde_json::{json, Map, Value};

/// A Notion property bag keyed by property name.
pub type PropertyBag = Map<String, Value>;

pub const PROP_NAME: &str = "Name";
pub const PROP_FIELD_SPECIALTY: &str = "Field/Specialty";
pub const PROP_AFFILIATION: &str = "Affiliation";
pub const PROP_POSITION: &str = "Position";
pub const PROP_LINKEDIN_URL: &str = "LinkedIn URL";
pub const PROP_POTENTIAL_TOPICS: &str = "Potential Topics";
pub const PROP_CONTACT_STATUS: &str = "Contact Status";
pub const PROP_RESEARCH_NOTES: &str = "Research Notes";
pub const PROP_EMAIL: &str = "Email";
pub const PROP_PRIORITY: &str = "Priority";

/// Notion rejects rich text segments longer than this many characters.
const MAX_TEXT_SEGMENT: usize = 2000;

// ========================= Outbound =========================

/// Build the `properties` object for a create or update request.
pub fn to_properties(update: &SpeakerUpdate) -> PropertyBag {
    let mut props = PropertyBag::new();

    if let Some(name) = &update.name {
        props.insert(PROP_NAME.into(), json!({ "title": rich_text(name) }));
    }
    if let Some(specialty) = update.field_specialty {
        props.insert(PROP_FIELD_SPECIALTY.into(), select(specialty));
    }
    if let Some(affiliation) = &update.affiliation {
        props.insert(
            PROP_AFFILIATION.into(),
            json!({ "rich_text": rich_text(affiliation) }),
        );
    }
    if let Some(position) = &update.position {
        props.insert(
            PROP_POSITION.into(),
            json!({ "rich_text": rich_text(position) }),
        );
    }
    if let Some(url) = &update.linkedin_url {
        props.insert(PROP_LINKEDIN_URL.into(), json!({ "url": nullable(url) }));
    }
    if let Some(topics) = &update.potential_topics {
        let options: Vec<Value> = topics.iter().map(|t| json!({ "name": t })).collect();
        props.insert(
            PROP_POTENTIAL_TOPICS.into(),
            json!({ "multi_select": options }),
        );
    }
    if let Some(status) = update.contact_status {
        props.insert(PROP_CONTACT_STATUS.into(), select(status));
    }
    if let Some(notes) = &update.research_notes {
        props.insert(
            PROP_RESEARCH_NOTES.into(),
            json!({ "rich_text": rich_text(notes) }),
        );
    }
    if let Some(email) = &update.email {
        props.insert(PROP_EMAIL.into(), json!({ "email": nullable(email) }));
    }
    if let Some(priority) = update.priority {
        props.insert(PROP_PRIORITY.into(), select(priority));
    }

    props
}

fn rich_text(content: &str) -> Value {
    let chars: Vec<char> = content.chars().collect();
    let segments: Vec<Value> = chars
        .chunks(MAX_TEXT_SEGMENT)
        .map(|chunk| json!({ "text": { "content": chunk.iter().collect::<String>() } }))
        .collect();
    Value::Array(segments)
}

fn select<C: Choice>(choice: C) -> Value {
    json!({ "select": { "name": choice.as_str() } })
}

/// Empty strings clear url/email properties; Notion wants `null`, not `""`.
fn nullable(value: &str) -> Value {
    if value.is_empty() {
        Value::Null
    } else {
        Value::String(value.to_string())
    }
}

/// Build a database query filter. `None` means list everything.
pub fn build_filter(filter: &SpeakerFilter) -> Option<Value> {
    if filter.is_empty() {
        return None;
    }

    let mut clauses = Vec::new();

    if let Some(name) = filter.name_query() {
        clauses.push(json!({ "property": PROP_NAME, "title": { "contains": name } }));
    }
    if let Some(specialty) = filter.field_specialty {
        clauses.push(equals(PROP_FIELD_SPECIALTY, specialty));
    }
    if let Some(affiliation) = filter.affiliation_query() {
        clauses.push(json!({
            "property": PROP_AFFILIATION,
            "rich_text": { "contains": affiliation }
        }));
    }
    if let Some(status) = filter.contact_status {
        clauses.push(equals(PROP_CONTACT_STATUS, status));
    }
    if let Some(priority) = filter.priority {
        clauses.push(equals(PROP_PRIORITY, priority));
    }

    if clauses.len() == 1 {
        clauses.pop()
    } else {
        Some(json!({ "and": clauses }))
    }
}

fn equals<C: Choice>(property: &str, choice: C) -> Value {
    json!({ "property": property, "select": { "equals": choice.as_str() } })
}

// ========================= Inbound =========================

/// Convert a Notion page into a speaker. Missing or unrecognised property
/// values fall back to empty/unset rather than failing.
pub fn speaker_from_page(page: &Page) -> Speaker {
    let props = &page.properties;

    Speaker {
        id: page.id.clone(),
        url: page.url.clone(),
        name: read_text(props, PROP_NAME, "title"),
        field_specialty: read_select(props, PROP_FIELD_SPECIALTY)
            .and_then(FieldSpecialty::parse_lenient),
        affiliation: non_blank(read_text(props, PROP_AFFILIATION, "rich_text")),
        position: non_blank(read_text(props, PROP_POSITION, "rich_text")),
        linkedin_url: read_scalar(props, PROP_LINKEDIN_URL, "url"),
        potential_topics: read_multi_select(props, PROP_POTENTIAL_TOPICS),
        contact_status: read_select(props, PROP_CONTACT_STATUS)
            .map(ContactStatus::parse_or_default)
            .unwrap_or_default(),
        research_notes: non_blank(read_text(props, PROP_RESEARCH_NOTES, "rich_text")),
        email: read_scalar(props, PROP_EMAIL, "email"),
        priority: read_select(props, PROP_PRIORITY).and_then(Priority::parse_lenient),
    }
}

fn read_text(props: &PropertyBag, property: &str, kind: &str) -> String {
    props
        .get(property)
        .and_then(|p| p.get(kind))
        .and_then(Value::as_array)
        .map(|segments| plain_text(segments))
        .unwrap_or_default()
}

/// Concatenate a rich text array into plain text.
pub fn plain_text(segments: &[Value]) -> String {
    segments.iter().filter_map(segment_text).collect()
}

/// Responses carry `plain_text`; request-shaped segments only have `text.content`.
fn segment_text(segment: &Value) -> Option<&str> {
    segment
        .get("plain_text")
        .and_then(Value::as_str)
        .or_else(|| {
            segment
                .get("text")
                .and_then(|t| t.get("content"))
                .and_then(Value::as_str)
        })
}

fn read_select<'a>(props: &'a PropertyBag, property: &str) -> Option<&'a str> {
    props
        .get(property)
        .and_then(|p| p.get("select"))
        .and_then(|s| s.get("name"))
        .and_then(Value::as_str)
}

fn read_scalar(props: &PropertyBag, property: &str, kind: &str) -> Option<String> {
    props
        .get(property)
        .and_then(|p| p.get(kind))
        .and_then(Value::as_str)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn read_multi_select(props: &PropertyBag, property: &str) -> Vec<String> {
    props
        .get(property)
        .and_then(|p| p.get("multi_select"))
        .and_then(Value::as_array)
        .map(|options| {
            options
                .iter()
                .filter_map(|o| o.get("name").and_then(Value::as_str))
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn non_blank(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
