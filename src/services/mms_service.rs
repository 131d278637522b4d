//! MMS service layer.

use super::DispatchSettings;
use crate::domain::normalize;
use crate::error::SendError;
use crate::metrics::Metrics;
use crate::models::{
    campaign_name, BatchItem, MmsBulkRequest, MmsParameters, MmsReceipt, SendResult,
};
use crate::repositories::CampaignRepository;
use crate::sms::annotate_mms;
use async_trait::async_trait;
use std::sync::Arc;

/// MMS service trait for business operations.
#[async_trait]
pub trait MmsService: Send + Sync {
    /// Send every item, in order. Always returns one result per item.
    async fn send_batch(&self, items: Vec<BatchItem>, params: &MmsParameters) -> Vec<SendResult>;
}

/// Default implementation of MmsService.
pub struct MmsServiceImpl {
    campaigns: Arc<dyn CampaignRepository>,
    settings: DispatchSettings,
    metrics: Metrics,
}

impl MmsServiceImpl {
    /// Create a new MMS service.
    pub fn new(
        campaigns: Arc<dyn CampaignRepository>,
        settings: DispatchSettings,
        metrics: Metrics,
    ) -> Self {
        Self {
            campaigns,
            settings,
            metrics,
        }
    }

    async fn send_item(
        &self,
        index: usize,
        item: &BatchItem,
        params: &MmsParameters,
    ) -> Result<MmsReceipt, SendError> {
        let message = item.mms_message(&params.message);
        let media = item.media_url(&params.media_url);
        if message.is_empty() || media.is_empty() {
            return Err(SendError::MissingRequiredField { item: index });
        }

        let raw_contacts = item
            .contacts()
            .ok_or(SendError::MissingMmsContacts { item: index })?;
        let partition = normalize(&raw_contacts);
        if !partition.invalid.is_empty() {
            self.metrics.record_contacts_rejected(partition.invalid.len());
        }
        if partition.valid.is_empty() {
            return Err(SendError::NoValidContacts { item: index });
        }

        if params.sender.is_empty() {
            return Err(SendError::MissingSender { item: index });
        }

        let preview = annotate_mms(&message, params.campaign_type);
        let sent_to = partition.valid_strings();
        let request = MmsBulkRequest {
            media: media.clone(),
            message: message.clone(),
            delivered_message: preview.delivered_message.clone(),
            sender: params.sender.id.clone(),
            contacts: sent_to.clone(),
            name: campaign_name(&self.settings.campaign_name_prefix, &chrono::Local::now()),
            campaign_type: params.campaign_type,
            reply_stop_to_opt_out: preview.reply_stop_to_opt_out,
        };

        let response = self.campaigns.submit_mms(&request).await?;

        tracing::info!("MMS item {} submitted: {} contacts", index, sent_to.len());

        Ok(MmsReceipt {
            success: true,
            sent_to,
            skipped_contacts: partition.invalid,
            original_message: message,
            delivered_message: preview.delivered_message,
            message_length: preview.length,
            media,
            campaign_type: params.campaign_type.as_str().to_string(),
            reply_stop_to_opt_out: preview.reply_stop_to_opt_out,
            response,
        })
    }
}

#[async_trait]
impl MmsService for MmsServiceImpl {
    async fn send_batch(&self, items: Vec<BatchItem>, params: &MmsParameters) -> Vec<SendResult> {
        let mut results = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            match self.send_item(index, item, params).await {
                Ok(receipt) => results.push(SendResult::Mms(receipt)),
                Err(e) => {
                    tracing::warn!("MMS item {} failed: {}", index, e);
                    self.metrics.record_item_failed();
                    results.push(SendResult::failure(e.to_string()));
                }
            }
        }

        let failed = results.iter().filter(|r| !r.is_success()).count();
        tracing::info!(
            "MMS batch complete: {} items, {} failed",
            results.len(),
            failed
        );
        results
    }
}
