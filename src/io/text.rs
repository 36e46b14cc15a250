//! Permissive UTF-8 rendering.
//!
//! Bytes are decoded chunk by chunk; invalid sequences are dropped or
//! replaced according to a [`DecodePolicy`]. Rendering never fails. A strict
//! decode is run alongside so callers can report where the bytes stop being
//! valid UTF-8.

use crate::error::CommandError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// How invalid UTF-8 sequences are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Drop invalid sequences.
    #[default]
    Ignore,
    /// Substitute U+FFFD for each maximal invalid sequence.
    Replace,
}

impl DecodePolicy {
    /// Returns the policy name as accepted on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Replace => "replace",
        }
    }
}

impl fmt::Display for DecodePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecodePolicy {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "replace" => Ok(Self::Replace),
            other => Err(CommandError::InvalidArgument(format!(
                "unknown decode policy: {other} (expected ignore or replace)"
            ))),
        }
    }
}

/// Result of rendering bytes as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendering {
    /// Policy used for invalid sequences.
    pub policy: DecodePolicy,
    /// The decoded text.
    pub text: String,
    /// Offset of the first invalid byte, or `None` if the input is valid UTF-8.
    pub valid_up_to: Option<usize>,
}

impl Rendering {
    /// Returns true if the bytes decoded without loss.
    #[must_use]
    pub const fn is_lossless(&self) -> bool {
        self.valid_up_to.is_none()
    }
}

/// Renders bytes as text under the given policy.
///
/// # Examples
///
/// ```
/// use hexpeek::io::text::{DecodePolicy, render_text};
///
/// let ignored = render_text(&[0xff, 0x00], DecodePolicy::Ignore);
/// assert_eq!(ignored.text, "\0");
/// assert_eq!(ignored.valid_up_to, Some(0));
///
/// let replaced = render_text(&[0xff, 0x00], DecodePolicy::Replace);
/// assert_eq!(replaced.text, "\u{FFFD}\0");
/// ```
#[must_use]
pub fn render_text(bytes: &[u8], policy: DecodePolicy) -> Rendering {
    let valid_up_to = validate_utf8(bytes).err();

    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        if policy == DecodePolicy::Replace && !chunk.invalid().is_empty() {
            text.push(char::REPLACEMENT_CHARACTER);
        }
    }

    Rendering {
        policy,
        text,
        valid_up_to,
    }
}

/// Validates that a byte slice is valid UTF-8.
///
/// # Errors
///
/// Returns the byte offset of the first invalid UTF-8 sequence.
pub fn validate_utf8(bytes: &[u8]) -> std::result::Result<&str, usize> {
    std::str::from_utf8(bytes).map_err(|e| e.valid_up_to())
}
