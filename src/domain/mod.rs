//! Domain value objects and types.
//!
//! Type-safe wrappers for the concepts the gateway cares about: canonical
//! contacts, campaign types, sender categories, and sender identities. Values
//! are validated at construction time so invalid data cannot be represented.

pub mod campaign;
pub mod errors;
pub mod phone;
pub mod sender;

pub use campaign::{CampaignType, SenderCategory};
pub use errors::ValidationError;
pub use phone::{normalize, normalize_contact, CanonicalContact, ContactPartition};
pub use sender::{SenderOption, SenderSelection};
