// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use roster_core::{StorageMode, StudentRecord};

use crate::cli::OutputFormat;
use crate::display;
use crate::error::Result;
use crate::sync::{RecordStore, Session};

use super::{emit_notices, open_session};

pub async fn run(mode: Option<StorageMode>, output: OutputFormat) -> Result<()> {
    let (mut session, _config, _work_dir) = open_session(mode)?;
    let rendered = run_impl(&mut session, output).await?;
    emit_notices(&mut session);
    println!("{}", rendered);
    Ok(())
}

/// Internal implementation that accepts a session for testing.
pub(crate) async fn run_impl<S: RecordStore>(
    session: &mut Session<S>,
    output: OutputFormat,
) -> Result<String> {
    session.reload().await;
    render_records(session.records(), output)
}

/// Render a record collection in the requested format.
pub(crate) fn render_records(records: &[StudentRecord], output: OutputFormat) -> Result<String> {
    Ok(match output {
        OutputFormat::Text => display::format_records(records),
        OutputFormat::Json => serde_json::to_string_pretty(records)?,
        OutputFormat::Id => records
            .iter()
            .map(|r| r.id.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
