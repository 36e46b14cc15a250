//! Error types for hexpeek operations.
//!
//! This module provides the error hierarchy using `thiserror`. Only hex
//! decoding and output formatting can fail; text rendering never does.

use thiserror::Error;

/// Result type alias for hexpeek operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed hexadecimal input.
    #[error("format error: {0}")]
    Format(#[from] HexError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Hex decoding errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// The input has an odd number of digits.
    #[error("odd number of hex digits: {length}")]
    OddLength {
        /// Length of the input in bytes.
        length: usize,
    },

    /// A character outside `[0-9a-fA-F]` was found.
    #[error("invalid hex character {character:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte index in the input.
        index: usize,
    },

    /// The digit count does not match the expected byte length.
    #[error("invalid hex string length: {length}")]
    InvalidLength {
        /// Length of the input in bytes.
        length: usize,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::OutputFormat(err.to_string())
    }
}
