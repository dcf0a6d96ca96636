// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rosterlib - student record management against a remote store.
//!
//! This crate provides the functionality for the `roster` CLI tool: a
//! student-record client that syncs with a remote HTTP backend and
//! substitutes local demo behavior whenever the backend is unreachable.
//!
//! # Main Components
//!
//! - [`sync::Session`] - synchronization controller (records, mode, notices)
//! - [`sync::HttpStore`] - HTTP store client for the record backend
//! - [`Config`] - base address and default storage mode
//! - [`Error`] - error types for all operations
//!
//! # Fallback behavior
//!
//! A failed load substitutes the mode's demo seed set; failed mutations
//! apply optimistically to the in-memory collection. No remote failure
//! surfaces as an error - only as a notice.

mod cli;
pub mod colors;
mod commands;
mod completions;
mod display;
pub mod validate;

pub mod config;
pub mod error;
pub mod sync;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{find_work_dir, init_work_dir, Config};
pub use error::{Error, Result};

use commands::edit::EditFields;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub async fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { base_url, mode } => commands::init::run(base_url, mode),
        Command::Config {
            base_url,
            mode,
            output,
        } => commands::config::run(base_url, mode, output),
        Command::List { mode, output } => commands::list::run(mode, output).await,
        Command::New {
            name,
            age,
            course,
            grade,
            email,
            phone,
            mode,
            output,
        } => commands::new::run(name, age, course, grade, email, phone, mode, output).await,
        Command::Edit {
            id,
            name,
            age,
            course,
            grade,
            email,
            phone,
            mode,
            output,
        } => {
            let fields = EditFields {
                name,
                age,
                course,
                grade,
                email,
                phone,
            };
            commands::edit::run(id, fields, mode, output).await
        }
        Command::Delete { ids, mode } => commands::delete::run(ids, mode).await,
        Command::Mode { mode, output } => commands::mode::run(mode, output).await,
        Command::Completions { shell } => completions::run(shell),
    }
}
