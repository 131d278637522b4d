//! SMS service layer.
//!
//! Runs each batch item through contact normalization, sender resolution and
//! compliance annotation, then submits it as its own campaign.

use super::sender_service::SenderLookup;
use super::DispatchSettings;
use crate::domain::{normalize, SenderCategory};
use crate::error::{GuniApiResult, SendError};
use crate::metrics::Metrics;
use crate::models::{
    campaign_name, BatchItem, SendResult, SmsBulkRequest, SmsParameters, SmsPreview, SmsReceipt,
};
use crate::repositories::{CampaignRepository, SenderRepository};
use crate::sms::{annotate, strip_non_ascii, AnnotateOptions};
use async_trait::async_trait;
use std::sync::Arc;

/// SMS service trait for business operations.
#[async_trait]
pub trait SmsService: Send + Sync {
    /// Send every item, in order. Always returns one result per item.
    async fn send_batch(&self, items: Vec<BatchItem>, params: &SmsParameters) -> Vec<SendResult>;

    /// Annotate `params.message` for `contacts` without sending anything.
    async fn preview(&self, params: &SmsParameters, contacts: &[String])
        -> GuniApiResult<SmsPreview>;
}

/// Default implementation of SmsService.
pub struct SmsServiceImpl {
    senders: Arc<dyn SenderRepository>,
    campaigns: Arc<dyn CampaignRepository>,
    settings: DispatchSettings,
    metrics: Metrics,
}

impl SmsServiceImpl {
    /// Create a new SMS service.
    pub fn new(
        senders: Arc<dyn SenderRepository>,
        campaigns: Arc<dyn CampaignRepository>,
        settings: DispatchSettings,
        metrics: Metrics,
    ) -> Self {
        Self {
            senders,
            campaigns,
            settings,
            metrics,
        }
    }

    async fn send_item(
        &self,
        index: usize,
        item: &BatchItem,
        params: &SmsParameters,
        lookup: &mut SenderLookup<'_>,
    ) -> Result<SmsReceipt, SendError> {
        let mut message = item.sms_message(&params.message);
        if !params.allow_unicode {
            message = strip_non_ascii(&message);
        }
        if message.is_empty() {
            return Err(SendError::MissingMessage { item: index });
        }

        let raw_contacts = item
            .contacts()
            .ok_or(SendError::MissingContacts { item: index })?;
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
        let sender = lookup.resolve(&params.sender).await?;

        let annotated = annotate(
            &message,
            AnnotateOptions {
                campaign: params.campaign_type,
                sender: sender.category,
                allow_unicode: params.allow_unicode,
                placement: self.settings.footer_placement,
            },
        );

        let sent_to = partition.valid_strings();
        let request = SmsBulkRequest::new(
            campaign_name(&self.settings.campaign_name_prefix, &chrono::Local::now()),
            params.sender.id.clone(),
            params.campaign_type,
            annotated.optout,
            annotated.reply_stop_to_opt_out,
            sent_to.clone(),
            annotated.wire_message.clone(),
        );

        let response = self.campaigns.submit_sms(&request).await?;

        tracing::info!(
            "SMS item {} submitted: {} contacts, {} parts ({})",
            index,
            sent_to.len(),
            annotated.metrics.parts,
            annotated.metrics.encoding
        );

        Ok(SmsReceipt {
            success: true,
            sent_to,
            invalid_contacts: partition.invalid,
            message: annotated.wire_message,
            message_length: annotated.metrics.length,
            parts: annotated.metrics.parts,
            encoding: annotated.metrics.encoding.to_string(),
            exceeds_table: annotated.metrics.exceeds_table,
            unicode_detected: annotated.unicode_detected,
            unicode_allowed: params.allow_unicode,
            selected_sender_display: sender.display,
            sender_type: sender.category.as_str().to_string(),
            preview_message: annotated.preview_message,
            optout: annotated.optout,
            reply_stop_to_opt_out: annotated.reply_stop_to_opt_out,
            response,
        })
    }
}

#[async_trait]
impl SmsService for SmsServiceImpl {
    async fn send_batch(&self, items: Vec<BatchItem>, params: &SmsParameters) -> Vec<SendResult> {
        let mut lookup = SenderLookup::new(self.senders.as_ref());
        let mut results = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            match self.send_item(index, item, params, &mut lookup).await {
                Ok(receipt) => results.push(SendResult::Sms(receipt)),
                Err(e) => {
                    tracing::warn!("SMS item {} failed: {}", index, e);
                    self.metrics.record_item_failed();
                    results.push(SendResult::failure(e.to_string()));
                }
            }
        }

        let failed = results.iter().filter(|r| !r.is_success()).count();
        tracing::info!(
            "SMS batch complete: {} items, {} failed",
            results.len(),
            failed
        );
        results
    }

    async fn preview(
        &self,
        params: &SmsParameters,
        contacts: &[String],
    ) -> GuniApiResult<SmsPreview> {
        let partition = normalize(contacts);

        let (category, display) = if params.sender.is_empty() {
            (SenderCategory::Unknown, None)
        } else {
            let mut lookup = SenderLookup::new(self.senders.as_ref());
            let sender = lookup.resolve(&params.sender).await?;
            (sender.category, sender.display)
        };

        let annotated = annotate(
            &params.message,
            AnnotateOptions {
                campaign: params.campaign_type,
                sender: category,
                allow_unicode: params.allow_unicode,
                placement: self.settings.footer_placement,
            },
        );

        Ok(SmsPreview {
            valid_contacts: partition.valid_strings(),
            invalid_contacts: partition.invalid,
            wire_message: annotated.wire_message,
            preview_message: annotated.preview_message,
            message_length: annotated.metrics.length,
            parts: annotated.metrics.parts,
            encoding: annotated.metrics.encoding.to_string(),
            exceeds_table: annotated.metrics.exceeds_table,
            optout: annotated.optout,
            reply_stop_to_opt_out: annotated.reply_stop_to_opt_out,
            unicode_detected: annotated.unicode_detected,
            sender_type: category.as_str().to_string(),
            selected_sender_display: display,
        })
    }
}
