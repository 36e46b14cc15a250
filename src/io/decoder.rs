//! Hex decoding.
//!
//! Turns a string of hexadecimal digit pairs into a [`ByteBuffer`].

use crate::core::ByteBuffer;
use crate::error::HexError;
use hex::FromHexError;

/// The empty Redis snapshot a master streams to a freshly synced replica.
///
/// Decodes to 88 bytes: the `REDIS0011` magic, `redis-ver`, `redis-bits`,
/// `ctime`, `used-mem` and `aof-base` auxiliary fields, the EOF opcode and an
/// 8-byte checksum.
pub const EMPTY_RDB_HEX: &str = "524544495330303131fa0972656469732d76657205372e322e30fa0a72656469732d62697473c040fa056374696d65c26d08bc65fa08757365642d6d656dc2b0c41000fa08616f662d62617365c000fff06e3bfec0ff5aa2";

/// Decodes a hex string into bytes.
///
/// Surrounding ASCII whitespace is ignored. Digits may be upper or lower
/// case.
///
/// # Errors
///
/// Returns [`HexError::OddLength`] if the digit count is odd, or
/// [`HexError::InvalidCharacter`] for anything outside `[0-9a-fA-F]`.
///
/// # Examples
///
/// ```
/// use hexpeek::io::decode_hex;
///
/// let buffer = decode_hex("41424344").unwrap();
/// assert_eq!(buffer.as_bytes(), b"ABCD");
/// assert!(decode_hex("abc").is_err());
/// ```
pub fn decode_hex(input: &str) -> Result<ByteBuffer, HexError> {
    let digits = input.trim_ascii();
    let offset = input.len() - input.trim_ascii_start().len();
    hex::decode(digits)
        .map(ByteBuffer::from)
        .map_err(|err| map_hex_error(err, digits, offset))
}

/// Maps a `hex` crate error on `digits` back onto the untrimmed input.
///
/// `hex` reports the failing byte cast to `char`; the lead byte of a
/// multibyte character is always the first to fail, so the index is a char
/// boundary of `digits` and the real character can be recovered from it.
fn map_hex_error(err: FromHexError, digits: &str, offset: usize) -> HexError {
    match err {
        FromHexError::InvalidHexCharacter { c, index } => HexError::InvalidCharacter {
            character: digits
                .get(index..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(c),
            index: offset + index,
        },
        FromHexError::OddLength => HexError::OddLength {
            length: digits.len(),
        },
        FromHexError::InvalidStringLength => HexError::InvalidLength {
            length: digits.len(),
        },
    }
}
