// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed demo records, one set per storage mode.
//!
//! Used only as fallback content for the load path when the remote
//! store is unreachable. Create/update fallbacks synthesize records
//! from user input instead.

use crate::record::{StorageMode, StudentRecord};

/// Returns the demo seed set for the given mode.
pub fn seed_records(mode: StorageMode) -> Vec<StudentRecord> {
    match mode {
        StorageMode::Primary => vec![
            StudentRecord {
                id: 1,
                name: "John Doe".to_string(),
                age: 20,
                course: "Computer Science".to_string(),
                grade: "A".to_string(),
                email: "john@example.com".to_string(),
                phone: "+1-555-0101".to_string(),
            },
            StudentRecord {
                id: 2,
                name: "Jane Smith".to_string(),
                age: 19,
                course: "Mathematics".to_string(),
                grade: "A-".to_string(),
                email: "jane@example.com".to_string(),
                phone: "+1-555-0102".to_string(),
            },
            StudentRecord {
                id: 3,
                name: "Mike Johnson".to_string(),
                age: 21,
                course: "Physics".to_string(),
                grade: "B+".to_string(),
                email: "mike@example.com".to_string(),
                phone: "+1-555-0103".to_string(),
            },
        ],
        StorageMode::Alternate => vec![
            StudentRecord {
                id: 1,
                name: "Alice Brown".to_string(),
                age: 22,
                course: "Chemistry".to_string(),
                grade: "A+".to_string(),
                email: "alice@example.com".to_string(),
                phone: "+1-555-0201".to_string(),
            },
            StudentRecord {
                id: 2,
                name: "Bob Wilson".to_string(),
                age: 20,
                course: "Biology".to_string(),
                grade: "B".to_string(),
                email: "bob@example.com".to_string(),
                phone: "+1-555-0202".to_string(),
            },
        ],
    }
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
