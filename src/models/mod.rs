//! Data models for the Guni gateway.
//!
//! This module contains the request bodies the gateway accepts, the batch
//! items callers submit, and the per-item results returned to them.

pub mod campaign;
pub mod item;
pub mod result;

pub use campaign::{campaign_name, MmsBulkRequest, SenderIdsResponse, SmsBulkRequest};
pub use item::{BatchItem, MmsParameters, SmsParameters};
pub use result::{MmsReceipt, SendFailure, SendResult, SmsPreview, SmsReceipt};
