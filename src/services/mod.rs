//! Application service layer.
//!
//! Services run the per-item send pipeline (normalize, annotate, submit) over
//! a batch and turn every failure into that item's result. They sit between
//! the MCP handlers and the repositories.

mod mms_service;
mod sender_service;
mod sms_service;

pub use mms_service::{MmsService, MmsServiceImpl};
pub use sender_service::{ResolvedSender, SenderLookup, SenderService, SenderServiceImpl};
pub use sms_service::{SmsService, SmsServiceImpl};

use crate::config::Config;
use crate::sms::FooterPlacement;

/// Settings shared by every campaign a service submits.
#[derive(Debug, Clone)]
pub struct DispatchSettings {
    /// Prefix of generated campaign names
    pub campaign_name_prefix: String,

    /// Where the compliance footer ends up
    pub footer_placement: FooterPlacement,
}

impl DispatchSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            campaign_name_prefix: config.campaign_name_prefix.clone(),
            footer_placement: config.footer_placement,
        }
    }
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            campaign_name_prefix: "n8n".to_string(),
            footer_placement: FooterPlacement::default(),
        }
    }
}
