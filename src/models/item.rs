//! Batch items and static send parameters.
//!
//! Every item is an arbitrary JSON record from an upstream step. Fields found
//! in the record win over the static parameters configured for the batch.

use crate::domain::{CampaignType, SenderSelection};
use serde_json::Value;

/// Static configuration for an SMS batch, used where an item has no value.
#[derive(Debug, Clone)]
pub struct SmsParameters {
    pub sender: SenderSelection,
    pub campaign_type: CampaignType,
    pub message: String,
    pub allow_unicode: bool,
}

/// Static configuration for an MMS batch, used where an item has no value.
#[derive(Debug, Clone)]
pub struct MmsParameters {
    pub sender: SenderSelection,
    pub campaign_type: CampaignType,
    pub message: String,
    pub media_url: String,
}

/// One input record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchItem(Value);

impl BatchItem {
    pub fn new(json: Value) -> Self {
        Self(json)
    }

    pub fn json(&self) -> &Value {
        &self.0
    }

    fn body(&self) -> Option<&Value> {
        self.0.get("body")
    }

    /// Scalar text at `key`; null, missing, objects and arrays yield `None`.
    fn text(value: Option<&Value>) -> Option<String> {
        match value? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// SMS text: `message`, then `body.message`, then the static fallback.
    pub fn sms_message(&self, fallback: &str) -> String {
        Self::text(self.0.get("message"))
            .or_else(|| Self::text(self.body().and_then(|b| b.get("message"))))
            .unwrap_or_else(|| fallback.to_string())
    }

    /// MMS text: `mmsMessage`, then `body.message`, then the static fallback.
    pub fn mms_message(&self, fallback: &str) -> String {
        Self::text(self.0.get("mmsMessage"))
            .or_else(|| Self::text(self.body().and_then(|b| b.get("message"))))
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Media URL: `mediaUrl`, then `body.media`, then the static fallback.
    pub fn media_url(&self, fallback: &str) -> String {
        Self::text(self.0.get("mediaUrl"))
            .or_else(|| Self::text(self.body().and_then(|b| b.get("media"))))
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Raw contacts from `body.contacts`.
    ///
    /// `None` unless the field is a non-empty array. Numbers are kept as their
    /// decimal text; any other non-string entry is kept as its JSON text so it
    /// lands in the invalid list rather than vanishing.
    pub fn contacts(&self) -> Option<Vec<String>> {
        let contacts = self.body()?.get("contacts")?.as_array()?;
        if contacts.is_empty() {
            return None;
        }
        Some(
            contacts
                .iter()
                .map(|c| match c {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
        )
    }
}

impl From<Value> for BatchItem {
    fn from(json: Value) -> Self {
        Self(json)
    }
}
