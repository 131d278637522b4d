mod guni_campaign_repository;
mod guni_sender_repository;
mod traits;

pub use guni_campaign_repository::GuniCampaignRepository;
pub use guni_sender_repository::GuniSenderRepository;
pub use traits::{CampaignRepository, SenderRepository};
