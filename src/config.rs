//! Configuration management for the Guni MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! The .env file is loaded through `dotenvy`, which never writes to stdout (MCP uses
//! stdout for communication).

use crate::error::{ConfigError, ConfigResult};
use crate::sms::FooterPlacement;
use std::env;
use tracing_subscriber::EnvFilter;

/// Default Guni API base URL.
pub const DEFAULT_API_URL: &str = "https://apit.gunisms.com.au/api/v1";

/// Configuration for the Guni MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Guni API base URL (including the `/api/v1` prefix)
    pub guni_api_url: String,

    /// Guni API token, sent as both bearer token and `guni-token` header
    pub guni_api_token: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// How long the sender-id list stays cached, in seconds (default: 300)
    pub sender_cache_ttl_secs: u64,

    /// Prefix of the generated campaign name (default: "n8n")
    pub campaign_name_prefix: String,

    /// Where the opt-out footer is applied (default: preview only)
    pub footer_placement: FooterPlacement,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `GUNI_API_TOKEN`: API token for authentication
    ///
    /// Optional environment variables:
    /// - `GUNI_API_BASE_URL`: Base URL for the Guni API
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `SENDER_CACHE_TTL_SECONDS`: Sender list cache TTL (default: 300)
    /// - `CAMPAIGN_NAME_PREFIX`: Campaign name prefix (default: "n8n")
    /// - `COMPLIANCE_FOOTER`: `preview` or `wire` (default: `preview`)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let guni_api_token = env::var("GUNI_API_TOKEN")
            .map_err(|_| ConfigError::MissingVar("GUNI_API_TOKEN".to_string()))?;

        if guni_api_token.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "GUNI_API_TOKEN".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let guni_api_url =
            env::var("GUNI_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        if !guni_api_url.starts_with("http://") && !guni_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "GUNI_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let sender_cache_ttl_secs = Self::parse_env_u64("SENDER_CACHE_TTL_SECONDS", 300)?;

        let campaign_name_prefix =
            env::var("CAMPAIGN_NAME_PREFIX").unwrap_or_else(|_| "n8n".to_string());

        let footer_placement = match env::var("COMPLIANCE_FOOTER") {
            Ok(val) => val
                .parse::<FooterPlacement>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "COMPLIANCE_FOOTER".to_string(),
                    reason,
                })?,
            Err(_) => FooterPlacement::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            guni_api_url,
            guni_api_token,
            request_timeout,
            sender_cache_ttl_secs,
            campaign_name_prefix,
            footer_placement,
            log_level,
        })
    }

    /// Log filter for the subscriber.
    ///
    /// `RUST_LOG` wins when set; otherwise `log_level`. An unparsable level
    /// falls back to `error`.
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::try_new(&self.log_level).unwrap_or_else(|_| EnvFilter::new("error"))
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            guni_api_url: DEFAULT_API_URL.to_string(),
            guni_api_token: String::new(),
            request_timeout: 10,
            sender_cache_ttl_secs: 300,
            campaign_name_prefix: "n8n".to_string(),
            footer_placement: FooterPlacement::default(),
            log_level: "error".to_string(),
        }
    }
}
