//! Sender identities.

use super::campaign::SenderCategory;
use super::errors::ValidationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A sending identity as listed by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SenderOption {
    /// Sender id sent back to the gateway
    pub value: String,

    /// Human-readable label, e.g. "0412 345 678 (Dedicated)"
    pub display: String,
}

impl SenderOption {
    pub fn new(value: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            display: display.into(),
        }
    }

    /// Category derived from the display label.
    pub fn category(&self) -> SenderCategory {
        SenderCategory::from_display(&self.display)
    }

    pub fn supports_mms(&self) -> bool {
        self.category().supports_mms()
    }
}

/// The sender a caller picked.
///
/// Callers either pass a plain sender id or the packed JSON form
/// `{"value": "...", "display": "..."}` that option pickers produce. The
/// packed form is decoded here once; downstream code only sees this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderSelection {
    pub id: String,
    pub display: Option<String>,
}

impl SenderSelection {
    pub fn is_empty(&self) -> bool {
        self.id.trim().is_empty()
    }
}

impl FromStr for SenderSelection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('{') {
            let option: SenderOption = serde_json::from_str(trimmed)
                .map_err(|e| ValidationError::InvalidSenderOption(e.to_string()))?;
            let display = Some(option.display).filter(|d| !d.is_empty());
            return Ok(Self {
                id: option.value,
                display,
            });
        }
        Ok(Self {
            id: trimmed.to_string(),
            display: None,
        })
    }
}

impl From<SenderOption> for SenderSelection {
    fn from(option: SenderOption) -> Self {
        Self {
            id: option.value,
            display: Some(option.display),
        }
    }
}
