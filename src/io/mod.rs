//! Decoding for hexpeek.
//!
//! Hex input to bytes, bytes to permissively decoded text.

pub mod decoder;
pub mod text;

pub use decoder::{EMPTY_RDB_HEX, decode_hex};
pub use text::{DecodePolicy, Rendering, render_text};
