pub mod mock_notion_client;
pub mod mock_speaker_repository;

#[allow(unused_imports)]
pub use mock_notion_client::{named_page, page, MockNotionClient, RecordedQuery};
#[allow(unused_imports)]
pub use mock_speaker_repository::MockSpeakerRepository;
