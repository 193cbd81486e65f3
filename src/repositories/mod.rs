mod notion_speaker_repository;
mod traits;

pub use notion_speaker_repository::NotionSpeakerRepository;
pub use traits::SpeakerRepository;
