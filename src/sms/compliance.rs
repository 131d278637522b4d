//! Opt-out footer policy.
//!
//! Promotional traffic must tell recipients how to unsubscribe. Shared and
//! dedicated numbers can receive replies, so they use "Reply STOP"; every
//! other sender gets an unsubscribe link that the gateway fills in.

use crate::domain::{CampaignType, SenderCategory};
use serde::Serialize;
use std::str::FromStr;

/// Footer for senders that accept replies.
pub const REPLY_STOP_FOOTER: &str = "   Reply STOP to optout";
/// Marker that shows the reply footer is already present.
pub const REPLY_STOP_MARKER: &str = "Reply STOP";

/// Footer for senders that cannot receive replies.
pub const UNSUBSCRIBE_LINK_FOOTER: &str = "  stopsms.co/u######";
/// Marker that shows the unsubscribe link is already present.
pub const UNSUBSCRIBE_LINK_MARKER: &str = "stopsms.co/u";

/// MMS promotional footer.
pub const MMS_REPLY_STOP_FOOTER: &str = "  Reply STOP to opt-out";

/// Where the opt-out footer ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterPlacement {
    /// Footer shown in the preview only; the gateway appends its own
    #[default]
    Preview,
    /// Footer also written into the message sent to the gateway
    Wire,
}

impl FromStr for FooterPlacement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "preview" => Ok(Self::Preview),
            "wire" => Ok(Self::Wire),
            other => Err(format!("Must be 'preview' or 'wire', got: {}", other)),
        }
    }
}

/// What a campaign/sender combination requires of an outgoing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompliancePolicy {
    /// Gateway should attach an unsubscribe link
    pub optout: bool,
    /// Gateway should honour "STOP" replies
    pub reply_stop_to_opt_out: bool,
    /// Footer text and the marker that means it is already there
    pub footer: Option<(&'static str, &'static str)>,
    /// Characters the footer adds to the billed length
    pub surcharge: usize,
}

impl CompliancePolicy {
    pub fn for_campaign(campaign: CampaignType, sender: SenderCategory) -> Self {
        match (campaign, sender) {
            (CampaignType::Notification, _) => Self {
                optout: false,
                reply_stop_to_opt_out: false,
                footer: None,
                surcharge: 0,
            },
            (CampaignType::Promotional, SenderCategory::Shared | SenderCategory::Dedicated) => {
                Self {
                    optout: false,
                    reply_stop_to_opt_out: true,
                    footer: Some((REPLY_STOP_FOOTER, REPLY_STOP_MARKER)),
                    surcharge: 23,
                }
            }
            (CampaignType::Promotional, _) => Self {
                optout: true,
                reply_stop_to_opt_out: false,
                footer: Some((UNSUBSCRIBE_LINK_FOOTER, UNSUBSCRIBE_LINK_MARKER)),
                surcharge: 20,
            },
        }
    }

    /// Append the footer unless the message already carries its marker.
    pub fn apply(&self, message: &str) -> String {
        match self.footer {
            Some((footer, marker)) if !message.contains(marker) => format!("{}{}", message, footer),
            _ => message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_has_no_footer() {
        for sender in [
            SenderCategory::Personal,
            SenderCategory::Shared,
            SenderCategory::Unknown,
        ] {
            let policy = CompliancePolicy::for_campaign(CampaignType::Notification, sender);
            assert!(!policy.optout);
            assert!(!policy.reply_stop_to_opt_out);
            assert_eq!(policy.surcharge, 0);
            assert_eq!(policy.apply("Your code is 1234"), "Your code is 1234");
        }
    }

    #[test]
    fn test_promotional_reply_stop_senders() {
        for sender in [SenderCategory::Shared, SenderCategory::Dedicated] {
            let policy = CompliancePolicy::for_campaign(CampaignType::Promotional, sender);
            assert!(!policy.optout);
            assert!(policy.reply_stop_to_opt_out);
            assert_eq!(policy.surcharge, 23);
            assert_eq!(policy.apply("Sale"), "Sale   Reply STOP to optout");
        }
    }

    #[test]
    fn test_promotional_link_senders() {
        for sender in [
            SenderCategory::Personal,
            SenderCategory::Business,
            SenderCategory::Unknown,
        ] {
            let policy = CompliancePolicy::for_campaign(CampaignType::Promotional, sender);
            assert!(policy.optout);
            assert!(!policy.reply_stop_to_opt_out);
            assert_eq!(policy.surcharge, 20);
            assert_eq!(policy.apply("Sale"), "Sale  stopsms.co/u######");
        }
    }

    #[test]
    fn test_footer_applied_once() {
        let policy =
            CompliancePolicy::for_campaign(CampaignType::Promotional, SenderCategory::Shared);
        let once = policy.apply("Sale");
        assert_eq!(policy.apply(&once), once);
    }

    #[test]
    fn test_footer_placement_parse() {
        assert_eq!("Preview".parse::<FooterPlacement>().unwrap(), FooterPlacement::Preview);
        assert_eq!("wire".parse::<FooterPlacement>().unwrap(), FooterPlacement::Wire);
        assert!("both".parse::<FooterPlacement>().is_err());
    }
}
