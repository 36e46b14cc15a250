//! Binary entry point for hexpeek.

#![allow(clippy::print_stderr)]

use clap::Parser;
use hexpeek::cli::output::{OutputFormat, format_error, write_output};
use hexpeek::cli::{Cli, execute};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    hexpeek::logging::init(cli.verbose);
    let format = OutputFormat::parse(&cli.format);

    let (stdout, status) = match execute(&cli) {
        Ok(output) => (output, ExitCode::SUCCESS),
        Err(e) => {
            let error_output = format_error(&e, format);
            match format {
                // JSON errors go to stdout for programmatic parsing
                OutputFormat::Json => (error_output, ExitCode::FAILURE),
                OutputFormat::Text => {
                    eprintln!("Error: {error_output}");
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    if let Err(e) = write_output(io::stdout().lock(), &stdout) {
        eprintln!("Error writing to stdout: {e}");
        return ExitCode::FAILURE;
    }
    status
}
