//! Gateway request and response bodies.

use crate::domain::{CampaignType, SenderOption};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Response of `GET /auth/ac/sender-ids`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SenderIdsResponse {
    /// Senders on the account; absent or malformed lists decode as empty
    #[serde(default, deserialize_with = "deserialize_lenient_senders")]
    pub data: Vec<SenderOption>,
}

fn deserialize_lenient_senders<'de, D>(deserializer: D) -> Result<Vec<SenderOption>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Body of `POST /gateway/bulk?mode=Mobile`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SmsBulkRequest {
    pub name: String,
    pub sender: String,
    pub campaign_type: CampaignType,
    /// Always "sms"
    pub camp_type: &'static str,
    pub optout: bool,
    #[serde(rename = "replyStopToOptOut")]
    pub reply_stop_to_opt_out: bool,
    pub contacts: Vec<String>,
    /// Always 0
    pub unsubscribe: u32,
    #[serde(rename = "totalContacts")]
    pub total_contacts: usize,
    pub message: String,
    /// Always false: the campaign is sent, not saved as a draft
    pub saved: bool,
}

impl SmsBulkRequest {
    pub fn new(
        name: String,
        sender: String,
        campaign_type: CampaignType,
        optout: bool,
        reply_stop_to_opt_out: bool,
        contacts: Vec<String>,
        message: String,
    ) -> Self {
        Self {
            name,
            sender,
            campaign_type,
            camp_type: "sms",
            optout,
            reply_stop_to_opt_out,
            total_contacts: contacts.len(),
            contacts,
            unsubscribe: 0,
            message,
            saved: false,
        }
    }
}

/// Text fields of the multipart `POST /gatewaymms/bulk`.
#[derive(Debug, Clone, PartialEq)]
pub struct MmsBulkRequest {
    pub media: String,
    pub message: String,
    pub delivered_message: String,
    pub sender: String,
    pub contacts: Vec<String>,
    pub name: String,
    pub campaign_type: CampaignType,
    pub reply_stop_to_opt_out: bool,
}

impl MmsBulkRequest {
    /// Form fields in submission order.
    ///
    /// `contacts` travels as a JSON array string.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let contacts = serde_json::to_string(&self.contacts).unwrap_or_else(|_| "[]".to_string());
        vec![
            ("media", self.media.clone()),
            ("message", self.message.clone()),
            ("deliveredMessage", self.delivered_message.clone()),
            ("sender", self.sender.clone()),
            ("contacts", contacts),
            ("name", self.name.clone()),
            ("campaignType", self.campaign_type.as_str().to_string()),
            ("replyStopToOptOut", self.reply_stop_to_opt_out.to_string()),
        ]
    }
}

/// Campaign name in the form `"<prefix> dd-mm-yyyy HH:MM:SS"`.
pub fn campaign_name<Tz>(prefix: &str, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{} {}", prefix, at.format("%d-%m-%Y %H:%M:%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_sms_request_serialization() {
        let request = SmsBulkRequest::new(
            "n8n 01-02-2025 03:04:05".to_string(),
            "#SharedNum#".to_string(),
            CampaignType::Promotional,
            false,
            true,
            vec!["61412345678".to_string(), "61412345679".to_string()],
            "Hello".to_string(),
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["campaign_type"], "promotional");
        assert_eq!(json["camp_type"], "sms");
        assert_eq!(json["replyStopToOptOut"], true);
        assert_eq!(json["optout"], false);
        assert_eq!(json["totalContacts"], 2);
        assert_eq!(json["unsubscribe"], 0);
        assert_eq!(json["saved"], false);
        assert_eq!(json["contacts"][1], "61412345679");
    }

    #[test]
    fn test_mms_form_fields() {
        let request = MmsBulkRequest {
            media: "https://cdn.example.com/menu.jpg".to_string(),
            message: "New menu".to_string(),
            delivered_message: "New menu  Reply STOP to opt-out".to_string(),
            sender: "61400000000".to_string(),
            contacts: vec!["61412345678".to_string()],
            name: "n8n 01-02-2025 03:04:05".to_string(),
            campaign_type: CampaignType::Promotional,
            reply_stop_to_opt_out: true,
        };

        let fields = request.form_fields();
        assert_eq!(fields[4], ("contacts", "[\"61412345678\"]".to_string()));
        assert_eq!(fields[6], ("campaignType", "promotional".to_string()));
        assert_eq!(fields[7], ("replyStopToOptOut", "true".to_string()));
    }

    #[test]
    fn test_campaign_name_format() {
        let at = Utc.with_ymd_and_hms(2025, 2, 1, 3, 4, 5).unwrap();
        assert_eq!(campaign_name("n8n", &at), "n8n 01-02-2025 03:04:05");
    }

    #[test]
    fn test_sender_ids_response_lenient() {
        let parsed: SenderIdsResponse = serde_json::from_str(
            r#"{"data":[{"value":"ACME","display":"ACME (Business)"},"junk"]}"#,
        )
        .unwrap();
        assert_eq!(parsed.data.len(), 1);

        let parsed: SenderIdsResponse = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(parsed.data.is_empty());

        let parsed: SenderIdsResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(parsed.data.is_empty());
    }
}
