// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use roster_core::StorageMode;

use crate::config::{init_work_dir, Config, DEFAULT_BASE_URL};
use crate::error::Result;

pub fn run(base_url: Option<String>, mode: Option<StorageMode>) -> Result<()> {
    let config = Config {
        base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        mode: mode.unwrap_or_default(),
    };

    let work_dir = init_work_dir(Path::new("."), &config)?;
    println!("Initialized {}", work_dir.display());
    Ok(())
}
