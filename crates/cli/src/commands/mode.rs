// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use roster_core::StorageMode;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::sync::{RecordStore, Session};

use super::{emit_notices, open_session};
use super::list::render_records;

pub async fn run(mode: Option<StorageMode>, output: OutputFormat) -> Result<()> {
    match mode {
        None => show(output),
        Some(target) => switch(target, output).await,
    }
}

/// Show the configured default mode.
fn show(output: OutputFormat) -> Result<()> {
    let (config, _work_dir) = Config::discover()?;
    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "mode": config.mode }))
        }
        OutputFormat::Text | OutputFormat::Id => println!("{}", config.mode),
    }
    Ok(())
}

/// Switch to the target mode, reload, and persist the choice when a
/// config file exists.
async fn switch(target: StorageMode, output: OutputFormat) -> Result<()> {
    let (mut session, mut config, work_dir) = open_session(None)?;
    let rendered = run_impl(&mut session, target, output).await?;
    emit_notices(&mut session);
    println!("{}", rendered);

    if let Some(dir) = work_dir {
        config.mode = target;
        config.save(&dir)?;
    }
    Ok(())
}

/// Internal implementation that accepts a session for testing.
pub(crate) async fn run_impl<S: RecordStore>(
    session: &mut Session<S>,
    target: StorageMode,
    output: OutputFormat,
) -> Result<String> {
    session.switch_mode(target).await;
    render_records(session.records(), output)
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
