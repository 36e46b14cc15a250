//! CLI layer for hexpeek.
//!
//! Argument parsing with clap, the decode command, and output formatting.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::Cli;
