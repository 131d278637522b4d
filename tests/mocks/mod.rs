//! In-memory repository implementations shared by the integration tests.

mod mock_campaign_repository;
mod mock_sender_repository;

#[allow(unused_imports)]
pub use mock_campaign_repository::MockCampaignRepository;
#[allow(unused_imports)]
pub use mock_sender_repository::MockSenderRepository;
