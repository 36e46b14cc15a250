//! Byte buffer for hexpeek.
//!
//! A `ByteBuffer` holds the bytes produced by decoding a hex string. It is
//! created once, read by both renderers, and never mutated.

use serde::{Serialize, Serializer};
use std::fmt;

/// An ordered, immutable sequence of bytes.
///
/// # Examples
///
/// ```
/// use hexpeek::core::ByteBuffer;
///
/// let buffer = ByteBuffer::from(vec![0x41, 0x42]);
/// assert_eq!(buffer.len(), 2);
/// assert_eq!(buffer.to_hex(), "4142");
/// assert_eq!(buffer.to_string(), r#"b"AB""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ByteBuffer {
    bytes: Box<[u8]>,
}

impl ByteBuffer {
    /// Returns the underlying bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the number of bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Checks if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Re-encodes the bytes as lowercase hex.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Checks whether `needle` occurs as a contiguous run of bytes.
    ///
    /// An empty needle is always found.
    #[must_use]
    pub fn contains(&self, needle: &[u8]) -> bool {
        needle.is_empty() || self.bytes.windows(needle.len()).any(|w| w == needle)
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            bytes: bytes.into_boxed_slice(),
        }
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Writes the bytes as an escaped byte-string literal, e.g. `b"REDIS\xfa\t"`.
impl fmt::Display for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b\"{}\"", self.bytes.escape_ascii())
    }
}

// Serialized as hex so JSON output stays ASCII.
impl Serialize for ByteBuffer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
