//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;
mod error;

pub use args::{Args, Command, ConfigAction};
pub use commands::{analyze, classify, init_config, list_names, show_config, stream, sweep, Context};
pub use error::CliError;
