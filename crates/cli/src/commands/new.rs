// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use roster_core::{StorageMode, StudentInput};

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::sync::{RecordStore, Session};
use crate::validate::validate_input;

use super::{emit_notices, open_session};

#[allow(clippy::too_many_arguments)]
pub async fn run(
    name: String,
    age: u8,
    course: String,
    grade: String,
    email: String,
    phone: String,
    mode: Option<StorageMode>,
    output: OutputFormat,
) -> Result<()> {
    let input = StudentInput {
        name,
        age,
        course,
        grade,
        email,
        phone,
    };
    let (mut session, _config, _work_dir) = open_session(mode)?;
    let rendered = run_impl(&mut session, input, output).await?;
    emit_notices(&mut session);
    println!("{}", rendered);
    Ok(())
}

/// Internal implementation that accepts a session for testing.
pub(crate) async fn run_impl<S: RecordStore>(
    session: &mut Session<S>,
    input: StudentInput,
    output: OutputFormat,
) -> Result<String> {
    validate_input(&input)?;

    session.reload().await;
    session.create(input).await;

    // Create appends, so the newest record is last.
    let Some(record) = session.records().last() else {
        return Ok(String::new());
    };
    Ok(match output {
        OutputFormat::Text => format!("Added {}: {}", record.id, record.name),
        OutputFormat::Json => serde_json::to_string_pretty(record)?,
        OutputFormat::Id => record.id.to_string(),
    })
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
