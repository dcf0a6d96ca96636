// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use roster_core::StorageMode;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::{Error, Result};

/// Show the effective configuration, or edit and persist it.
pub fn run(
    base_url: Option<String>,
    mode: Option<StorageMode>,
    output: OutputFormat,
) -> Result<()> {
    let (mut config, work_dir) = Config::discover()?;

    if base_url.is_none() && mode.is_none() {
        return show(&config, output);
    }

    // Edits require a config file to write back to.
    let Some(dir) = work_dir else {
        return Err(Error::NotInitialized);
    };
    if let Some(url) = base_url {
        config.base_url = url.trim_end_matches('/').to_string();
    }
    if let Some(m) = mode {
        config.mode = m;
    }
    config.save(&dir)?;
    show(&config, output)
}

fn show(config: &Config, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "base_url": config.base_url,
                "mode": config.mode,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text | OutputFormat::Id => {
            println!("base-url: {}", config.base_url);
            println!("mode: {}", config.mode);
        }
    }
    Ok(())
}
