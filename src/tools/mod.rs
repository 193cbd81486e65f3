//! MCP tools for maintaining the speaker roster.
//!
//! - **speakers**: Add, search, update, list and inspect speakers
//! - **research**: Format research findings for review before adding
//! - **format**: Text reports and error rendering shared by the tools

pub mod format;
pub mod research;
pub mod speakers;

pub use research::{prepare_research_summary, ResearchSummaryParams};
pub use speakers::{
    AddSpeakerParams, ListSpeakersParams, SearchSpeakersParams, SpeakerIdParams, SpeakerTools,
    UpdateSpeakerParams,
};
