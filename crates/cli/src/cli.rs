// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use roster_core::StorageMode;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Parse a storage mode argument.
fn storage_mode(s: &str) -> Result<StorageMode, String> {
    s.parse::<StorageMode>().map_err(|e| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Id,
}

#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage student records against a remote store, with demo-data fallback")]
#[command(
    long_about = "Manage student records against a remote store.\n\n\
    Records live on a remote backend selected by a storage mode tag; when the\n\
    backend is unreachable, every operation falls back to local demo behavior\n\
    so the tool stays usable standalone."
)]
pub struct Cli {
    /// Run as if roster was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a .roster/ config in the current directory
    Init {
        /// Base address of the record backend
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Default storage mode (primary, alternate)
        #[arg(long, value_parser = storage_mode)]
        mode: Option<StorageMode>,
    },

    /// Show or edit configuration
    Config {
        /// Set the base address of the record backend
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Set the default storage mode (primary, alternate)
        #[arg(long, value_parser = storage_mode)]
        mode: Option<StorageMode>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List student records
    #[command(after_help = "\
Examples:
  roster list                 List records in the default mode
  roster list -m alternate    List records in the alternate namespace
  roster list -o json         Output in JSON format
  roster list -o id           Output only record ids")]
    List {
        /// Storage mode for this invocation (primary, alternate)
        #[arg(long, short = 'm', value_parser = storage_mode)]
        mode: Option<StorageMode>,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Add a new student record
    #[command(after_help = "\
Examples:
  roster new \"Ada Lovelace\" --age 20 --course Mathematics --grade A \\
      --email ada@example.com --phone +1-555-0199
  roster new \"Ada Lovelace\" --age 20 --course Math --grade A \\
      --email ada@example.com --phone 000 -o id    Output only the new id")]
    New {
        /// Student name
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Age in years
        #[arg(long)]
        age: u8,

        /// Course of study
        #[arg(long, value_parser = non_empty_string)]
        course: String,

        /// Letter grade (e.g. A, B+)
        #[arg(long, value_parser = non_empty_string)]
        grade: String,

        /// Contact email
        #[arg(long)]
        email: String,

        /// Contact phone
        #[arg(long)]
        phone: String,

        /// Storage mode for this invocation (primary, alternate)
        #[arg(long, short = 'm', value_parser = storage_mode)]
        mode: Option<StorageMode>,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Edit fields of an existing student record
    #[command(arg_required_else_help = true)]
    Edit {
        /// Record id
        id: i64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New age
        #[arg(long)]
        age: Option<u8>,

        /// New course
        #[arg(long)]
        course: Option<String>,

        /// New grade
        #[arg(long)]
        grade: Option<String>,

        /// New email
        #[arg(long)]
        email: Option<String>,

        /// New phone
        #[arg(long)]
        phone: Option<String>,

        /// Storage mode for this invocation (primary, alternate)
        #[arg(long, short = 'm', value_parser = storage_mode)]
        mode: Option<StorageMode>,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Delete student record(s)
    #[command(arg_required_else_help = true)]
    Delete {
        /// Record id(s)
        #[arg(required = true)]
        ids: Vec<i64>,

        /// Storage mode for this invocation (primary, alternate)
        #[arg(long, short = 'm', value_parser = storage_mode)]
        mode: Option<StorageMode>,
    },

    /// Show the current storage mode or switch to another
    Mode {
        /// Mode to switch to (primary, alternate); omit to show current
        #[arg(value_parser = storage_mode)]
        mode: Option<StorageMode>,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
