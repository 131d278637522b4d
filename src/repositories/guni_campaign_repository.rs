use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use crate::client::AsyncGuniClient;
use crate::error::GuniApiResult;
use crate::models::{MmsBulkRequest, SmsBulkRequest};
use crate::repositories::traits::CampaignRepository;

/// Campaign repository implementation using the Guni API client.
pub struct GuniCampaignRepository {
    client: Arc<dyn AsyncGuniClient>,
}

impl GuniCampaignRepository {
    pub fn new(client: Arc<dyn AsyncGuniClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CampaignRepository for GuniCampaignRepository {
    async fn submit_sms(&self, request: &SmsBulkRequest) -> GuniApiResult<Value> {
        tracing::debug!(
            "Submitting SMS campaign '{}' to {} contacts",
            request.name,
            request.total_contacts
        );
        self.client.send_sms_bulk(request).await
    }

    async fn submit_mms(&self, request: &MmsBulkRequest) -> GuniApiResult<Value> {
        tracing::debug!(
            "Submitting MMS campaign '{}' to {} contacts",
            request.name,
            request.contacts.len()
        );
        self.client.send_mms_bulk(request).await
    }
}
