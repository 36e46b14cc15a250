//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats. The text format is two labelled
//! lines: the decoded text, then the raw byte string.

use crate::core::ByteBuffer;
use crate::error::{CommandError, Error};
use crate::io::Rendering;
use serde::Serialize;
use std::fmt::Write;
use std::io;

/// Label preceding the decoded text.
pub const TEXT_LABEL: &str = "Decoded Text (UTF-8):";

/// Label preceding the raw byte string.
pub const RAW_LABEL: &str = "Binary Data:";

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats the rendered text and raw bytes of a buffer.
///
/// # Errors
///
/// Returns [`CommandError::OutputFormat`] if JSON serialization fails.
pub fn format_report(
    buffer: &ByteBuffer,
    rendering: &Rendering,
    format: OutputFormat,
) -> Result<String, CommandError> {
    match format {
        OutputFormat::Text => Ok(format_report_text(buffer, rendering)),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Report<'a> {
                length: usize,
                hex: &'a ByteBuffer,
                #[serde(flatten)]
                rendering: &'a Rendering,
                raw: String,
            }
            format_json(&Report {
                length: buffer.len(),
                hex: buffer,
                rendering,
                raw: format_raw(buffer),
            })
        }
    }
}

fn format_report_text(buffer: &ByteBuffer, rendering: &Rendering) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{TEXT_LABEL} {}", rendering.text);
    let _ = writeln!(output, "{RAW_LABEL} {}", format_raw(buffer));
    output
}

/// Formats bytes as an escaped byte-string literal.
///
/// Printable ASCII is kept literal; everything else is escaped.
#[must_use]
pub fn format_raw(buffer: &ByteBuffer) -> String {
    buffer.to_string()
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
            })
            .unwrap_or_else(|_| "{}".to_string())
        }
    }
}

/// Writes formatted output, treating a closed pipe (e.g. `| head`) as success.
///
/// # Errors
///
/// Returns any write or flush error other than [`io::ErrorKind::BrokenPipe`].
pub fn write_output<W: io::Write>(mut writer: W, output: &str) -> io::Result<()> {
    match writer
        .write_all(output.as_bytes())
        .and_then(|()| writer.flush())
    {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> Result<String, CommandError> {
    Ok(serde_json::to_string_pretty(value)? + "\n")
}
