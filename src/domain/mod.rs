//! Domain value objects and types.
//!
//! This module contains the closed-set selector enums (specialty, contact
//! status, priority) and the type-safe speaker ID. Strict parsing rejects
//! bad tool input at the boundary; lenient parsing keeps reads from Notion
//! total.

pub mod choice;
pub mod errors;
pub mod speaker_id;

pub use choice::{Choice, ContactStatus, FieldSpecialty, Priority};
pub use errors::ValidationError;
pub use speaker_id::SpeakerId;
