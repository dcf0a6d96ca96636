// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use roster_core::StorageMode;

use crate::error::Result;
use crate::sync::{RecordStore, Session};

use super::{emit_notices, open_session};

pub async fn run(ids: Vec<i64>, mode: Option<StorageMode>) -> Result<()> {
    let (mut session, _config, _work_dir) = open_session(mode)?;
    let rendered = run_impl(&mut session, &ids).await?;
    emit_notices(&mut session);
    println!("{}", rendered);
    Ok(())
}

/// Internal implementation that accepts a session for testing.
pub(crate) async fn run_impl<S: RecordStore>(session: &mut Session<S>, ids: &[i64]) -> Result<String> {
    session.reload().await;

    for &id in ids {
        session.delete(id).await;
    }

    let noun = if ids.len() == 1 { "record" } else { "records" };
    Ok(format!("Deleted {} {}", ids.len(), noun))
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
