// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use roster_core::{StorageMode, StudentInput};

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use crate::sync::{RecordStore, Session};
use crate::validate::validate_input;

use super::{emit_notices, open_session};

/// Optional field overrides collected from the command line.
#[derive(Debug, Default)]
pub struct EditFields {
    pub name: Option<String>,
    pub age: Option<u8>,
    pub course: Option<String>,
    pub grade: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl EditFields {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.course.is_none()
            && self.grade.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }
}

pub async fn run(
    id: i64,
    fields: EditFields,
    mode: Option<StorageMode>,
    output: OutputFormat,
) -> Result<()> {
    let (mut session, _config, _work_dir) = open_session(mode)?;
    let rendered = run_impl(&mut session, id, fields, output).await?;
    emit_notices(&mut session);
    println!("{}", rendered);
    Ok(())
}

/// Internal implementation that accepts a session for testing.
pub(crate) async fn run_impl<S: RecordStore>(
    session: &mut Session<S>,
    id: i64,
    fields: EditFields,
    output: OutputFormat,
) -> Result<String> {
    if fields.is_empty() {
        return Err(Error::NothingToEdit);
    }

    session.reload().await;

    let existing = session
        .records()
        .iter()
        .find(|r| r.id == id)
        .cloned()
        .ok_or(Error::RecordNotFound(id))?;

    // The backend expects full payloads, so merge the overrides over
    // the current record.
    let input = StudentInput {
        name: fields.name.unwrap_or(existing.name),
        age: fields.age.unwrap_or(existing.age),
        course: fields.course.unwrap_or(existing.course),
        grade: fields.grade.unwrap_or(existing.grade),
        email: fields.email.unwrap_or(existing.email),
        phone: fields.phone.unwrap_or(existing.phone),
    };
    validate_input(&input)?;

    session.update(id, input).await;

    let Some(record) = session.records().iter().find(|r| r.id == id) else {
        return Ok(String::new());
    };
    Ok(match output {
        OutputFormat::Text => format!("Updated {}: {}", record.id, record.name),
        OutputFormat::Json => serde_json::to_string_pretty(record)?,
        OutputFormat::Id => record.id.to_string(),
    })
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
