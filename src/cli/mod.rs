//! Command-line interface

pub mod commands;
pub mod output;
pub mod terminal_output;

use clap::{Parser, Subcommand};
use commands::{DefaultsCommand, RunCommand, ValidateCommand};
use std::ffi::OsString;

/// Chain classical ciphers and text edits, showing every stage
#[derive(Debug, Parser, Clone)]
#[command(name = "cipherchain")]
#[command(version)]
#[command(about = "Chain classical ciphers and text edits, showing every stage", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run a pipeline over some input text
    Run(RunCommand),

    /// Validate a pipeline file and print its normalized steps
    Validate(ValidateCommand),

    /// Print the default parameters of an operation kind
    Defaults(DefaultsCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}
