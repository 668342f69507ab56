//! Blackstone CLI - command-line interface for the two-stage analysis pipeline.

pub mod cli;
pub mod commands;
pub mod config;
pub mod credential;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
