//! Contact normalization for Australian mobile numbers.
//!
//! Raw contacts arrive in whatever shape the caller had them in: spaces,
//! `+61`, `0061`, a leading trunk `0`, or a bare `4xxxxxxxx`. [`normalize`]
//! rewrites each one into the E.164-without-plus form the gateway expects
//! (`61` followed by nine digits) and sets aside anything it cannot place.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static INTERNATIONAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^61\d{9}$").expect("Failed to compile international regex"));

static LOCAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0?4\d{8}$").expect("Failed to compile local mobile regex"));

static BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^4\d{8}$").expect("Failed to compile bare mobile regex"));

/// A canonical Australian mobile number: always 11 digits, always starting `61`.
///
/// # Example
///
/// ```
/// use guni_mcp_server::domain::CanonicalContact;
///
/// let contact = CanonicalContact::new("61412345678").unwrap();
/// assert_eq!(contact.as_str(), "61412345678");
/// assert!(CanonicalContact::new("0412345678").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalContact(String);

impl CanonicalContact {
    /// Wrap an already-canonical number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the value matches `61\d{9}`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !INTERNATIONAL.is_match(&value) {
            return Err(ValidationError::InvalidPhone(value));
        }
        Ok(Self(value))
    }

    /// Get the number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for CanonicalContact {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CanonicalContact {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CanonicalContact::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for CanonicalContact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of normalizing a batch of raw contacts.
///
/// Both lists keep the relative order of the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactPartition {
    /// Contacts rewritten into canonical form
    pub valid: Vec<CanonicalContact>,

    /// Raw inputs that matched no recognised pattern, unchanged
    pub invalid: Vec<String>,
}

impl ContactPartition {
    /// The valid contacts as plain strings, in input order.
    pub fn valid_strings(&self) -> Vec<String> {
        self.valid.iter().map(|c| c.as_str().to_string()).collect()
    }
}

/// Normalize a single raw contact.
///
/// Returns `None` when the contact matches none of the recognised patterns.
/// The `610` repair runs before classification: `+61 0412 345 678` becomes
/// `61412345678`, while `+61012345678` collapses to ten digits and is rejected.
pub fn normalize_contact(raw: &str) -> Option<CanonicalContact> {
    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    // International dialing prefix
    if let Some(rest) = digits.strip_prefix("00") {
        digits = rest.to_string();
    }

    // "+61 0..." typed with the trunk zero kept
    if let Some(rest) = digits.strip_prefix("610") {
        digits = format!("61{}", rest);
    }

    let canonical = if INTERNATIONAL.is_match(&digits) {
        digits
    } else if LOCAL.is_match(&digits) {
        format!("61{}", digits.strip_prefix('0').unwrap_or(&digits))
    } else if BARE.is_match(&digits) {
        format!("61{}", digits)
    } else {
        return None;
    };

    Some(CanonicalContact(canonical))
}

/// Partition raw contacts into canonical and rejected sets.
///
/// Each input is classified on its own; duplicates are kept.
pub fn normalize<S: AsRef<str>>(contacts: &[S]) -> ContactPartition {
    let mut partition = ContactPartition::default();

    for raw in contacts {
        let raw = raw.as_ref();
        match normalize_contact(raw) {
            Some(contact) => partition.valid.push(contact),
            None => partition.invalid.push(raw.to_string()),
        }
    }

    partition
}
