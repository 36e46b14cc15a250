//! # hexpeek
//!
//! Decode a hex string and eyeball the bytes.
//!
//! The pipeline is three steps run once: decode the hex digits into a
//! [`ByteBuffer`], render the bytes as text with a permissive UTF-8 policy,
//! and print the bytes as an escaped byte string. Nothing about the bytes'
//! structure is interpreted.
//!
//! ```
//! use hexpeek::{DecodePolicy, decode_hex, render_text};
//!
//! let buffer = decode_hex("ff00").unwrap();
//! let rendering = render_text(buffer.as_bytes(), DecodePolicy::Ignore);
//! assert_eq!(rendering.text, "\0");
//! assert_eq!(buffer.to_string(), r#"b"\xff\x00""#);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;

// Re-export commonly used types at crate root
pub use error::{CommandError, Error, HexError, Result};

pub use core::ByteBuffer;

pub use io::{DecodePolicy, EMPTY_RDB_HEX, Rendering, decode_hex, render_text};

pub use cli::{Cli, OutputFormat};
