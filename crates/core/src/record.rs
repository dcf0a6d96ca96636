// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core record types for the roster client.
//!
//! This module contains the fundamental data types: StudentRecord,
//! StudentInput, and StorageMode.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A student record as held by the remote store (or its local stand-in).
///
/// Identity is `id`; every other field is mutable via update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub age: u8,
    pub course: String,
    pub grade: String,
    pub email: String,
    pub phone: String,
}

impl StudentRecord {
    /// Build a record from an input payload and an assigned id.
    pub fn from_input(id: i64, input: &StudentInput) -> Self {
        StudentRecord {
            id,
            name: input.name.clone(),
            age: input.age,
            course: input.course.clone(),
            grade: input.grade.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
        }
    }

    /// Overwrite every mutable field with the input, keeping the id.
    pub fn apply(&self, input: &StudentInput) -> Self {
        StudentRecord::from_input(self.id, input)
    }
}

/// The payload accepted for create and update operations: a
/// [`StudentRecord`] minus the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInput {
    pub name: String,
    pub age: u8,
    pub course: String,
    pub grade: String,
    pub email: String,
    pub phone: String,
}

/// Backend namespace selector carried on every request.
///
/// The two labels are opaque: the client has no behavioral difference
/// between them beyond the request tag and which seed set is used on
/// fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageMode {
    /// Default backend namespace.
    #[default]
    Primary,
    /// Secondary backend namespace.
    Alternate,
}

impl StorageMode {
    /// Returns the string representation used in requests and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageMode::Primary => "primary",
            StorageMode::Alternate => "alternate",
        }
    }
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StorageMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "primary" => Ok(StorageMode::Primary),
            "alternate" => Ok(StorageMode::Alternate),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
