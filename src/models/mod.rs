//! Data models for speaker tracking.
//!
//! This module contains the speaker record in its three shapes (creation
//! input, partial update, stored record), search criteria, and the
//! connection check outcome.

pub mod connection;
pub mod speaker;

pub use connection::ConnectionStatus;
pub use speaker::{NewSpeaker, Speaker, SpeakerFilter, SpeakerUpdate};
