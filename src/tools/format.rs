//! Text reports returned by the speaker tools.

use crate::domain::Choice;
use crate::error::{ErrorKind, ToolError};
use crate::models::{ConnectionStatus, Speaker};

pub const ADD_ERROR_PREFIX: &str = "Error adding speaker: ";
pub const SEARCH_ERROR_PREFIX: &str = "Error searching speakers: ";
pub const UPDATE_ERROR_PREFIX: &str = "Error updating speaker: ";
pub const LIST_ERROR_PREFIX: &str = "Error listing speakers: ";
pub const DETAILS_ERROR_PREFIX: &str = "Error getting speaker details: ";

/// Render a tool failure as a single line.
///
/// Validation failures carry their own `Error: ` prefix; everything else
/// is reported under the tool's prefix.
pub fn render_error(prefix: &str, error: &ToolError) -> String {
    match error.kind() {
        ErrorKind::Validation => format!("Error: {}", error),
        _ => format!("{}{}", prefix, error),
    }
}

pub fn added(speaker: &Speaker) -> String {
    format!(
        "Successfully added speaker '{}' to the database.\nNotion Page ID: {}\nURL: {}",
        speaker.name,
        speaker.id,
        speaker.url.as_deref().unwrap_or("N/A")
    )
}

pub fn updated(speaker: &Speaker) -> String {
    format!(
        "Successfully updated speaker '{}'.\nNotion Page ID: {}\nStatus: {}",
        speaker.name, speaker.id, speaker.contact_status
    )
}

pub fn search_results(speakers: &[Speaker]) -> String {
    if speakers.is_empty() {
        return "No speakers found matching the criteria.".to_string();
    }

    let mut lines = vec![format!("Found {} speaker(s):\n", speakers.len())];
    for s in speakers {
        lines.push("---".to_string());
        lines.push(format!("Name: {}", s.name));
        lines.push(format!("ID: {}", s.id));
        if let Some(field) = s.field_specialty {
            lines.push(format!("Field: {}", field));
        }
        if let Some(affiliation) = &s.affiliation {
            lines.push(format!("Affiliation: {}", affiliation));
        }
        if let Some(position) = &s.position {
            lines.push(format!("Position: {}", position));
        }
        lines.push(format!("Status: {}", s.contact_status));
        if let Some(priority) = s.priority {
            lines.push(format!("Priority: {}", priority));
        }
        if let Some(email) = &s.email {
            lines.push(format!("Email: {}", email));
        }
    }

    lines.join("\n")
}

/// Roster grouped by contact status, groups in order of first appearance.
pub fn speaker_list(speakers: &[Speaker]) -> String {
    if speakers.is_empty() {
        return "No speakers in the database yet.".to_string();
    }

    let mut groups: Vec<(&'static str, Vec<&Speaker>)> = Vec::new();
    for s in speakers {
        let status = s.contact_status.as_str();
        match groups.iter_mut().find(|(name, _)| *name == status) {
            Some((_, members)) => members.push(s),
            None => groups.push((status, vec![s])),
        }
    }

    let mut lines = vec![format!("Total speakers: {}\n", speakers.len())];
    for (status, members) in groups {
        lines.push(format!("\n## {} ({})", status, members.len()));
        for s in members {
            let mut line = format!("- {}", s.name);
            if let Some(affiliation) = &s.affiliation {
                line.push_str(&format!(" ({})", affiliation));
            }
            if let Some(priority) = s.priority {
                line.push_str(&format!(" [{}]", priority));
            }
            lines.push(line);
        }
    }

    lines.join("\n")
}

pub fn speaker_details(s: &Speaker) -> String {
    let not_specified = "Not specified";
    let mut lines = vec![
        format!("# {}", s.name),
        String::new(),
        format!("**Notion ID:** {}", s.id),
        format!("**Notion URL:** {}", s.url.as_deref().unwrap_or("N/A")),
        String::new(),
        "## Professional Info".to_string(),
        format!(
            "- **Field/Specialty:** {}",
            s.field_specialty.map_or(not_specified, |f| f.as_str())
        ),
        format!(
            "- **Affiliation:** {}",
            s.affiliation.as_deref().unwrap_or(not_specified)
        ),
        format!(
            "- **Position:** {}",
            s.position.as_deref().unwrap_or(not_specified)
        ),
        String::new(),
        "## Contact".to_string(),
        format!("- **Email:** {}", s.email.as_deref().unwrap_or(not_specified)),
        format!(
            "- **LinkedIn:** {}",
            s.linkedin_url.as_deref().unwrap_or(not_specified)
        ),
        format!("- **Status:** {}", s.contact_status),
        format!(
            "- **Priority:** {}",
            s.priority.map_or("Not set", |p| p.as_str())
        ),
        String::new(),
        "## Potential Topics".to_string(),
    ];

    if s.potential_topics.is_empty() {
        lines.push("- None specified".to_string());
    } else {
        lines.extend(s.potential_topics.iter().map(|t| format!("- {}", t)));
    }

    lines.push(String::new());
    lines.push("## Research Notes".to_string());
    lines.push(
        s.research_notes
            .clone()
            .unwrap_or_else(|| "No notes yet.".to_string()),
    );

    lines.join("\n")
}

pub fn connection(status: &ConnectionStatus) -> String {
    match status {
        ConnectionStatus::Connected {
            database_title,
            database_id,
        } => format!(
            "Connection successful!\nDatabase: {}\nDatabase ID: {}",
            database_title, database_id
        ),
        ConnectionStatus::Failed { error } => format!("Connection failed: {}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContactStatus, FieldSpecialty, Priority, ValidationError};
    use crate::error::NotionApiError;

    fn speaker(name: &str, status: ContactStatus) -> Speaker {
        Speaker {
            id: format!("id-{}", name.to_lowercase()),
            name: name.to_string(),
            contact_status: status,
            ..Default::default()
        }
    }

    #[test]
    fn test_added_report() {
        let mut s = speaker("Ada", ContactStatus::NotContacted);
        s.url = Some("https://www.notion.so/abc".to_string());

        assert_eq!(
            added(&s),
            "Successfully added speaker 'Ada' to the database.\nNotion Page ID: id-ada\nURL: https://www.notion.so/abc"
        );
    }

    #[test]
    fn test_search_results_empty() {
        assert_eq!(search_results(&[]), "No speakers found matching the criteria.");
    }

    #[test]
    fn test_search_results_only_present_fields() {
        let mut s = speaker("Ada", ContactStatus::Contacted);
        s.priority = Some(Priority::High);

        let report = search_results(&[s]);
        assert!(report.starts_with("Found 1 speaker(s):\n\n---\nName: Ada\nID: id-ada"));
        assert!(report.contains("Status: Contacted"));
        assert!(report.contains("Priority: High"));
        assert!(!report.contains("Field:"));
        assert!(!report.contains("Email:"));
    }

    #[test]
    fn test_speaker_list_groups_in_first_appearance_order() {
        let mut grace = speaker("Grace", ContactStatus::Confirmed);
        grace.affiliation = Some("Navy".to_string());
        grace.priority = Some(Priority::Low);

        let speakers = vec![
            grace,
            speaker("Ada", ContactStatus::NotContacted),
            speaker("Alan", ContactStatus::Confirmed),
        ];
        let report = speaker_list(&speakers);

        assert_eq!(
            report,
            "Total speakers: 3\n\n\n## Confirmed (2)\n- Grace (Navy) [Low]\n- Alan\n\n## Not Contacted (1)\n- Ada"
        );
    }

    #[test]
    fn test_speaker_list_empty() {
        assert_eq!(speaker_list(&[]), "No speakers in the database yet.");
    }

    #[test]
    fn test_speaker_details_placeholders() {
        let report = speaker_details(&speaker("Ada", ContactStatus::NotContacted));

        assert!(report.starts_with("# Ada\n\n**Notion ID:** id-ada\n**Notion URL:** N/A"));
        assert!(report.contains("- **Field/Specialty:** Not specified"));
        assert!(report.contains("- **Priority:** Not set"));
        assert!(report.contains("## Potential Topics\n- None specified"));
        assert!(report.ends_with("## Research Notes\nNo notes yet."));
    }

    #[test]
    fn test_speaker_details_populated() {
        let mut s = speaker("Ada", ContactStatus::InDiscussion);
        s.field_specialty = Some(FieldSpecialty::Bioinformatics);
        s.potential_topics = vec!["Engines".to_string(), "Notes".to_string()];
        s.research_notes = Some("First programmer.".to_string());

        let report = speaker_details(&s);
        assert!(report.contains("- **Field/Specialty:** Bioinformatics"));
        assert!(report.contains("- **Status:** In Discussion"));
        assert!(report.contains("## Potential Topics\n- Engines\n- Notes\n"));
        assert!(report.ends_with("First programmer."));
    }

    #[test]
    fn test_connection_reports() {
        let ok = ConnectionStatus::Connected {
            database_title: "Speakers".to_string(),
            database_id: "db1".to_string(),
        };
        assert_eq!(
            connection(&ok),
            "Connection successful!\nDatabase: Speakers\nDatabase ID: db1"
        );

        let failed = ConnectionStatus::Failed {
            error: "Timeout".to_string(),
        };
        assert_eq!(connection(&failed), "Connection failed: Timeout");
    }

    #[test]
    fn test_render_error_prefixes() {
        let validation = ToolError::from(ValidationError::EmptyName);
        assert_eq!(
            render_error(ADD_ERROR_PREFIX, &validation),
            "Error: name cannot be empty"
        );

        let remote = ToolError::from(NotionApiError::NotFound("gone".to_string()));
        let rendered = render_error(DETAILS_ERROR_PREFIX, &remote);
        assert!(rendered.starts_with("Error getting speaker details: "));
        assert!(rendered.contains("gone"));
    }
}
