//! Per-item send results.

use serde::Serialize;
use serde_json::Value;

/// Outcome of one batch item.
///
/// Serializes as a flat record with a `success` flag, so callers see either
/// the receipt fields or `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SendResult {
    Sms(SmsReceipt),
    Mms(MmsReceipt),
    Failed(SendFailure),
}

impl SendResult {
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failed(SendFailure {
            success: false,
            error: error.into(),
        })
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }

    /// Error message of a failed item.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(f) => Some(&f.error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendFailure {
    pub success: bool,
    pub error: String,
}

/// A submitted SMS campaign.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsReceipt {
    pub success: bool,
    pub sent_to: Vec<String>,
    pub invalid_contacts: Vec<String>,
    /// Message as submitted
    pub message: String,
    pub message_length: usize,
    pub parts: u32,
    pub encoding: String,
    pub exceeds_table: bool,
    pub unicode_detected: bool,
    pub unicode_allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_sender_display: Option<String>,
    pub sender_type: String,
    pub preview_message: String,
    pub optout: bool,
    pub reply_stop_to_opt_out: bool,
    /// Gateway response, untouched
    pub response: Value,
}

/// A submitted MMS campaign.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MmsReceipt {
    pub success: bool,
    pub sent_to: Vec<String>,
    pub skipped_contacts: Vec<String>,
    pub original_message: String,
    pub delivered_message: String,
    pub message_length: usize,
    pub media: String,
    #[serde(rename = "campaign_type")]
    pub campaign_type: String,
    pub reply_stop_to_opt_out: bool,
    pub response: Value,
}

/// An annotated SMS that was not sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsPreview {
    pub wire_message: String,
    pub preview_message: String,
    pub message_length: usize,
    pub parts: u32,
    pub encoding: String,
    pub exceeds_table: bool,
    pub optout: bool,
    pub reply_stop_to_opt_out: bool,
    pub unicode_detected: bool,
    pub sender_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_sender_display: Option<String>,
    pub valid_contacts: Vec<String>,
    pub invalid_contacts: Vec<String>,
}
