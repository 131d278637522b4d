//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is not a canonical Australian mobile number (`61` + 9 digits).
    InvalidPhone(String),

    /// The campaign type is neither promotional nor notification.
    InvalidCampaignType(String),

    /// A JSON-packed sender option could not be decoded.
    InvalidSenderOption(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidCampaignType(value) => write!(
                f,
                "Invalid campaign type: {} (expected promotional or notification)",
                value
            ),
            Self::InvalidSenderOption(reason) => write!(f, "Invalid sender option: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
