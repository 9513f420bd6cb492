//! CLI module for sonador
//!
//! Command handlers and output utilities for the `sonador` binary.

mod args;
mod commands;
mod logging;

pub use args::{
    parse_args, Cli, Command, InfoArgs, InitArgs, OutputFormat, TemplateArg, ValidateArgs,
};
pub use commands::run_command;
pub use logging::LogLevel;
