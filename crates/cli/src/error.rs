// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::validate::{MAX_AGE, MIN_AGE};

/// All possible errors that can occur in the rosterlib library.
///
/// Errors provide user-friendly messages with hints for common issues.
/// Remote store failures are deliberately absent: those are absorbed by
/// the synchronization controller and surface only as notices.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'roster init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("record not found: {0}\n  hint: run 'roster list' to see current records")]
    RecordNotFound(i64),

    #[error("invalid storage mode: '{0}'\n  hint: valid modes are: primary, alternate")]
    InvalidMode(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("{field} too long ({actual} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("age {0} out of range\n  hint: ages {min} to {max} are accepted", min = MIN_AGE, max = MAX_AGE)]
    AgeOutOfRange(u8),

    #[error("invalid email address: '{0}'\n  hint: expected user@domain")]
    InvalidEmail(String),

    #[error("nothing to edit\n  hint: pass at least one of --name, --age, --course, --grade, --email, --phone")]
    NothingToEdit,

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for rosterlib operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<roster_core::Error> for Error {
    fn from(e: roster_core::Error) -> Self {
        match e {
            roster_core::Error::InvalidMode(s) => Error::InvalidMode(s),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
