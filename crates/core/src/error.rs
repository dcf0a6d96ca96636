// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for roster-core operations.

use thiserror::Error;

/// All possible errors that can occur in roster-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid storage mode: '{0}'\n  hint: valid modes are: primary, alternate")]
    InvalidMode(String),
}

/// A specialized Result type for roster-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
