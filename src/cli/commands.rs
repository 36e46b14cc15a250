//! CLI command implementation.
//!
//! Runs the decode pipeline: hex to bytes, bytes to text, then formatting.

use crate::cli::output::{OutputFormat, format_report};
use crate::cli::parser::Cli;
use crate::error::Result;
use crate::io::{DecodePolicy, decode_hex, render_text};
use tracing::{debug, warn};

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the hex input is malformed, the decode policy is
/// unknown, or the output cannot be formatted.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let policy: DecodePolicy = cli.policy.parse()?;

    let input = cli.input();
    debug!(digits = input.len(), %policy, "decoding hex input");

    let buffer = decode_hex(input)?;
    let rendering = render_text(buffer.as_bytes(), policy);

    if let Some(offset) = rendering.valid_up_to {
        warn!(
            offset,
            len = buffer.len(),
            "some parts could not be decoded as UTF-8 text"
        );
    }

    Ok(format_report(&buffer, &rendering, format)?)
}
