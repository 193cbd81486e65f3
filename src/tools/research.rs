//! Research summary formatting.
//!
//! Turns web-research findings about a prospective speaker into a review
//! document for the user. Nothing is written to Notion; the assistant calls
//! `add_speaker` once the user approves.

use schemars::JsonSchema;
use serde::Deserialize;

/// Findings gathered about a prospective speaker.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ResearchSummaryParams {
    /// Speaker's full name
    pub name: String,

    /// University or company
    pub affiliation: String,

    /// Job title
    pub position: String,

    /// Primary field (should match a valid field/specialty option)
    pub field_specialty: String,

    /// Brief biography and background summary
    pub background: String,

    /// Key publications, projects, or achievements
    pub notable_work: String,

    /// Topics they could speak on
    pub potential_topics: Vec<String>,

    /// LinkedIn profile URL if found
    #[serde(default)]
    pub linkedin_url: Option<String>,

    /// Contact email if found
    #[serde(default)]
    pub email: Option<String>,

    /// Suggested priority level (default: "Medium")
    #[serde(default)]
    pub priority_recommendation: Option<String>,
}

/// Render the research summary for user review.
pub fn prepare_research_summary(params: &ResearchSummaryParams) -> String {
    let mut summary = format!(
        "\n# Research Summary: {name}\n\n\
         ## Professional Profile\n\
         - **Name:** {name}\n\
         - **Position:** {position}\n\
         - **Affiliation:** {affiliation}\n\
         - **Field:** {field}\n\n\
         ## Background\n{background}\n\n\
         ## Notable Work & Achievements\n{notable_work}\n\n\
         ## Potential Speaking Topics\n",
        name = params.name,
        position = params.position,
        affiliation = params.affiliation,
        field = params.field_specialty,
        background = params.background,
        notable_work = params.notable_work,
    );

    for topic in &params.potential_topics {
        summary.push_str(&format!("- {}\n", topic));
    }

    summary.push_str(&format!(
        "\n## Contact Information\n\
         - **LinkedIn:** {linkedin}\n\
         - **Email:** {email}\n\n\
         ## Recommendation\n\
         - **Priority:** {priority}\n\n\
         ---\n\
         **To add this speaker, confirm and I will call the add_speaker tool with the above information.**\n",
        linkedin = non_empty(&params.linkedin_url).unwrap_or("Not found"),
        email = non_empty(&params.email).unwrap_or("Not found"),
        priority = non_empty(&params.priority_recommendation).unwrap_or("Medium"),
    ));

    summary
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
