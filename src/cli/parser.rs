//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::Parser;

/// hexpeek: decode a hex string and eyeball the bytes.
///
/// Prints the bytes as permissively decoded UTF-8 text and as an escaped
/// byte string. Without arguments, inspects the empty Redis snapshot.
#[derive(Parser, Debug)]
#[command(name = "hexpeek")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Hex string to inspect.
    ///
    /// Defaults to the empty Redis snapshot sent during replica sync.
    #[arg(env = "HEXPEEK_HEX")]
    pub hex: Option<String>,

    /// How invalid UTF-8 is rendered (ignore, replace).
    #[arg(short, long, default_value = "ignore")]
    pub policy: String,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl Cli {
    /// Returns the hex input, using the embedded snapshot if not specified.
    #[must_use]
    pub fn input(&self) -> &str {
        self.hex.as_deref().unwrap_or(crate::io::EMPTY_RDB_HEX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_input() {
        let cli = Cli::parse_from(["hexpeek"]);
        assert_eq!(cli.input(), crate::io::EMPTY_RDB_HEX);
        assert_eq!(cli.policy, "ignore");
        assert_eq!(cli.format, "text");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_custom_input() {
        let cli = Cli::parse_from(["hexpeek", "41424344", "--policy", "replace", "-v"]);
        assert_eq!(cli.input(), "41424344");
        assert_eq!(cli.policy, "replace");
        assert!(cli.verbose);
    }
}
