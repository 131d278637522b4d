use crate::domain::SenderOption;
use crate::error::GuniApiResult;
use crate::models::{MmsBulkRequest, SmsBulkRequest};
use async_trait::async_trait;
use serde_json::Value;

/// Repository for the account's sender identities.
///
/// Provides abstraction over sender retrieval, enabling different
/// implementations (API client, mock, cached).
#[async_trait]
pub trait SenderRepository: Send + Sync {
    /// List every sender on the account.
    async fn list(&self) -> GuniApiResult<Vec<SenderOption>>;
}

/// Repository for campaign submission.
#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// Submit an SMS campaign, returning the gateway response.
    async fn submit_sms(&self, request: &SmsBulkRequest) -> GuniApiResult<Value>;

    /// Submit an MMS campaign, returning the gateway response.
    async fn submit_mms(&self, request: &MmsBulkRequest) -> GuniApiResult<Value>;
}
