pub mod config;
pub mod convert;
pub mod formats;
pub mod preview;

use clap::{Parser, Subcommand};

use budgeter::error::Result;
use budgeter::importer::Format;
use budgeter::settings::Settings;

/// The `--format` flag if given, else the configured default.
pub(crate) fn resolve_format(format: Option<&str>, settings: &Settings) -> Result<Format> {
    format.unwrap_or(settings.default_format.as_str()).parse()
}

#[derive(Parser)]
#[command(name = "budgeter", about = "Normalize bank and payment-provider CSV exports into one ledger format.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a provider CSV into the bare Date, Entity, Amount, Note format.
    Convert {
        /// Path to the CSV file to convert
        file: String,
        /// Format key (see `budgeter formats`); defaults to the configured format
        #[arg(long)]
        format: Option<String>,
        /// Output path (default: CONVERTED_<name> beside the input)
        #[arg(long)]
        output: Option<String>,
    },
    /// Decode a CSV and print its transactions.
    Preview {
        /// Path to the CSV file
        file: String,
        /// Format key (see `budgeter formats`)
        #[arg(long)]
        format: Option<String>,
        /// Show at most this many transactions
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List the supported CSV formats.
    Formats,
    /// View or change settings.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current settings.
    Show,
    /// Change a setting: default_format, output_prefix, log_level
    Set {
        key: String,
        value: String,
    },
}
