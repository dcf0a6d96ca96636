// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod mode;
pub mod new;

use std::path::PathBuf;

use roster_core::StorageMode;

use crate::config::Config;
use crate::display;
use crate::error::Result;
use crate::sync::{HttpStore, RecordStore, Session};

/// Open a session for the current context.
///
/// Discovers the config (defaults when none exists), applies the mode
/// override, and wires up the HTTP store. Returns the session, the
/// config, and the `.roster/` directory when one exists.
pub fn open_session(
    mode_override: Option<StorageMode>,
) -> Result<(Session<HttpStore>, Config, Option<PathBuf>)> {
    let (config, work_dir) = Config::discover()?;
    let mode = mode_override.unwrap_or(config.mode);
    let store = HttpStore::new(config.base_url.clone());
    Ok((Session::new(store, mode), config, work_dir))
}

/// Drain session notices to stderr.
pub fn emit_notices<S: RecordStore>(session: &mut Session<S>) {
    for notice in session.take_notices() {
        eprintln!("{}", display::format_notice(&notice));
    }
}
