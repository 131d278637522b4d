//! Message segmentation and compliance annotation.
//!
//! [`annotate`] turns a raw message body into what is actually sent (the wire
//! message), what the caller is shown (the preview), and the length metrics
//! that decide how many parts the gateway bills.

pub mod compliance;
pub mod encoding;
pub mod segments;

pub use compliance::{CompliancePolicy, FooterPlacement};
pub use encoding::{message_length, strip_non_ascii, EncodingClass};
pub use segments::{segment_count, SegmentRange, GSM7_TABLE, UNICODE_TABLE};

use crate::domain::{CampaignType, SenderCategory};
use serde::Serialize;

/// Length and billing information for a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthMetrics {
    /// Message length plus the footer surcharge
    pub length: usize,

    /// Billed parts, looked up from the unsurcharged length
    pub parts: u32,

    /// Encoding label ("GSM-7 SMS" / "Unicode SMS")
    pub encoding: &'static str,

    /// The message is longer than the part table covers
    pub exceeds_table: bool,
}

/// Inputs to [`annotate`].
#[derive(Debug, Clone, Copy)]
pub struct AnnotateOptions {
    pub campaign: CampaignType,
    pub sender: SenderCategory,
    pub allow_unicode: bool,
    pub placement: FooterPlacement,
}

/// A message ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedMessage {
    /// Text submitted to the gateway
    pub wire_message: String,

    /// Text shown to the caller, footer included
    pub preview_message: String,

    pub metrics: LengthMetrics,

    pub optout: bool,

    pub reply_stop_to_opt_out: bool,

    /// Non-ASCII survived into the wire message
    pub unicode_detected: bool,
}

/// Annotate an SMS body for sending.
///
/// Without `allow_unicode` every non-ASCII code point is removed first, so the
/// result is always GSM-7. Parts are computed from the body without the
/// footer; the reported length adds the footer's fixed surcharge.
pub fn annotate(message: &str, options: AnnotateOptions) -> AnnotatedMessage {
    let body = if options.allow_unicode {
        message.to_string()
    } else {
        strip_non_ascii(message)
    };

    let encoding = EncodingClass::detect(&body);
    let policy = CompliancePolicy::for_campaign(options.campaign, options.sender);
    let preview_message = policy.apply(&body);

    let length = message_length(&body);
    let row = segments::lookup(encoding, length);
    let metrics = LengthMetrics {
        length: length + policy.surcharge,
        parts: row.map(|r| r.parts).unwrap_or(1),
        encoding: encoding.label(),
        exceeds_table: length > 0 && row.is_none(),
    };

    let wire_message = match options.placement {
        FooterPlacement::Preview => body,
        FooterPlacement::Wire => preview_message.clone(),
    };

    AnnotatedMessage {
        wire_message,
        preview_message,
        metrics,
        optout: policy.optout,
        reply_stop_to_opt_out: policy.reply_stop_to_opt_out,
        unicode_detected: encoding == EncodingClass::Unicode,
    }
}

/// An MMS body with its delivered preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MmsPreview {
    pub delivered_message: String,
    pub reply_stop_to_opt_out: bool,
    pub length: usize,
}

/// Annotate an MMS body.
///
/// MMS senders are always shared or dedicated numbers, so promotional MMS
/// carry the reply footer.
pub fn annotate_mms(message: &str, campaign: CampaignType) -> MmsPreview {
    let promotional = campaign.is_promotional();
    let delivered_message = if promotional && !message.contains(compliance::REPLY_STOP_MARKER) {
        format!("{}{}", message, compliance::MMS_REPLY_STOP_FOOTER)
    } else {
        message.to_string()
    };

    MmsPreview {
        length: message_length(&delivered_message),
        delivered_message,
        reply_stop_to_opt_out: promotional,
    }
}
