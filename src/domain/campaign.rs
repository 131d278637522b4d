//! Campaign type and sender category.

use super::errors::ValidationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of campaign a message belongs to.
///
/// Promotional campaigns carry an opt-out footer; notifications do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    #[default]
    Promotional,
    Notification,
}

impl CampaignType {
    /// Wire value sent to the gateway.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Promotional => "promotional",
            Self::Notification => "notification",
        }
    }

    pub fn is_promotional(&self) -> bool {
        matches!(self, Self::Promotional)
    }
}

impl FromStr for CampaignType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "promotional" => Ok(Self::Promotional),
            "notification" => Ok(Self::Notification),
            _ => Err(ValidationError::InvalidCampaignType(s.to_string())),
        }
    }
}

impl fmt::Display for CampaignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a sending identity.
///
/// Determines which opt-out mechanism applies to promotional traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SenderCategory {
    Personal,
    Dedicated,
    Shared,
    Business,
    #[default]
    Unknown,
}

impl SenderCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Dedicated => "dedicated",
            Self::Shared => "shared",
            Self::Business => "business",
            Self::Unknown => "unknown",
        }
    }

    /// Classify from the display label the gateway returns for a sender.
    ///
    /// First keyword wins, checked in the order personal, dedicated, shared,
    /// business.
    pub fn from_display(display: &str) -> Self {
        let display = display.to_lowercase();
        if display.contains("personal") {
            Self::Personal
        } else if display.contains("dedicated") {
            Self::Dedicated
        } else if display.contains("shared") {
            Self::Shared
        } else if display.contains("business") {
            Self::Business
        } else {
            Self::Unknown
        }
    }

    /// Best guess from the sender id alone, used when the gateway does not
    /// list the sender.
    ///
    /// - `#...` or anything mentioning "shared": shared pool number
    /// - numeric starting `6`: personal number
    /// - numeric starting `4`: dedicated number
    /// - other numeric: unknown
    /// - anything else: alphanumeric business name
    pub fn infer_from_id(sender_id: &str) -> Self {
        let id = sender_id.trim();
        if id.is_empty() {
            return Self::Unknown;
        }
        if id.starts_with('#') || id.to_lowercase().contains("shared") {
            return Self::Shared;
        }
        if id.chars().all(|c| c.is_ascii_digit()) {
            return if id.starts_with('6') {
                Self::Personal
            } else if id.starts_with('4') {
                Self::Dedicated
            } else {
                Self::Unknown
            };
        }
        Self::Business
    }

    /// Whether the sender may be used for MMS.
    pub fn supports_mms(&self) -> bool {
        matches!(self, Self::Shared | Self::Dedicated)
    }
}

impl fmt::Display for SenderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
