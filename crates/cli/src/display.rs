// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use roster_core::{Notice, StudentRecord};

use crate::colors;

/// Format a single record line for list output.
pub fn format_record_line(record: &StudentRecord) -> String {
    format!(
        "- [{}] {}: {} ({}, age {}) <{}> {}",
        colors::grade(&record.grade),
        record.id,
        record.name,
        record.course,
        record.age,
        record.email,
        record.phone
    )
}

/// Format a record listing with a count header.
pub fn format_records(records: &[StudentRecord]) -> String {
    if records.is_empty() {
        return "No students found".to_string();
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(format!("Students ({})", records.len()));
    for record in records {
        lines.push(format_record_line(record));
    }
    lines.join("\n")
}

/// Render a notice for stderr.
pub fn format_notice(notice: &Notice) -> String {
    colors::notice(notice)
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
