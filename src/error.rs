//! Error types for the Guni MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when interacting with the Guni API.
#[derive(Error, Debug)]
pub enum GuniApiError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Authentication failed (bad or expired token)
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl GuniApiError {
    /// The provider-facing message, without the variant prefix.
    ///
    /// For status errors this is the `message` field of the response body when
    /// the provider sent one, otherwise the raw body.
    pub fn provider_message(&self) -> String {
        match self {
            Self::HttpError(message)
            | Self::ApiError { message, .. }
            | Self::Unauthorized(message) => message.clone(),
            Self::JsonError(e) => e.to_string(),
            Self::Timeout => "Request timeout".to_string(),
            Self::RateLimitExceeded => "Rate limit exceeded".to_string(),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that abort a single batch item.
///
/// These never escape the per-item boundary: the orchestrator turns each one
/// into a `{success: false, error}` result and moves on to the next item.
#[derive(Error, Debug)]
pub enum SendError {
    /// The item carried no contacts (SMS wording)
    #[error("No contacts found in input [item {item}]")]
    MissingContacts { item: usize },

    /// The item carried no contacts (MMS wording)
    #[error("No contacts found in input data [item {item}]")]
    MissingMmsContacts { item: usize },

    /// Every contact failed normalization
    #[error("No valid contacts found [item {item}]")]
    NoValidContacts { item: usize },

    /// SMS text resolved to nothing, or nothing survived ASCII stripping
    #[error("Message not found in input data or node parameters [item {item}]")]
    MissingMessage { item: usize },

    /// MMS message text or media URL could not be resolved
    #[error("Message or Media URL not found in input data or node parameters [item {item}]")]
    MissingRequiredField { item: usize },

    /// No sender was configured for the item
    #[error("Sender ID is required for item {item}")]
    MissingSender { item: usize },

    /// The provider call failed
    #[error("Guni API Request Failed: {}", .0.provider_message())]
    ProviderRequestFailed(#[from] GuniApiError),
}

/// Convenience type alias for Results with GuniApiError
pub type GuniApiResult<T> = Result<T, GuniApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
