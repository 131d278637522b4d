//! Character encoding detection.

use serde::Serialize;
use std::fmt;

/// How a message will be encoded on the carrier network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EncodingClass {
    /// Every code point is 7-bit ASCII
    Gsm7,
    /// At least one code point outside 0x00-0x7F
    Unicode,
}

impl EncodingClass {
    pub fn detect(message: &str) -> Self {
        if message.is_ascii() {
            Self::Gsm7
        } else {
            Self::Unicode
        }
    }

    /// Label reported back to callers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gsm7 => "GSM-7 SMS",
            Self::Unicode => "Unicode SMS",
        }
    }
}

impl fmt::Display for EncodingClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Drop every code point outside 0x00-0x7F.
pub fn strip_non_ascii(message: &str) -> String {
    message.chars().filter(char::is_ascii).collect()
}

/// Message length in UTF-16 code units, the unit carriers count in.
pub fn message_length(message: &str) -> usize {
    message.encode_utf16().count()
}
