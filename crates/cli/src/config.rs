// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.roster/config.toml` and includes:
//! - `base_url`: the base address of the record backend
//! - `mode`: the default storage mode for requests
//!
//! Unlike most project-local tools, a missing config is not an error:
//! the client must stay usable standalone, so [`Config::discover`]
//! falls back to compiled-in defaults when no `.roster/` directory
//! exists anywhere up the tree.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use roster_core::StorageMode;

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".roster";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default base address of the record backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// Project configuration stored in `.roster/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base address of the record backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Default storage mode for requests.
    #[serde(default)]
    pub mode: StorageMode,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: default_base_url(),
            mode: StorageMode::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the given `.roster/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.roster/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Discover configuration for the current directory.
    ///
    /// Returns the loaded config and the `.roster/` directory when one
    /// exists up the tree, or compiled-in defaults and `None` otherwise.
    pub fn discover() -> Result<(Self, Option<PathBuf>)> {
        match find_work_dir() {
            Some(work_dir) => {
                let config = Config::load(&work_dir)?;
                Ok((config, Some(work_dir)))
            }
            None => Ok((Config::default(), None)),
        }
    }
}

/// Find the `.roster` directory by walking up from the current directory.
pub fn find_work_dir() -> Option<PathBuf> {
    let current = std::env::current_dir().ok()?;
    find_work_dir_from(&current)
}

/// Find the `.roster` directory by walking up from the given path.
pub fn find_work_dir_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Some(work_dir);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Initialize a new `.roster` directory at the given path.
pub fn init_work_dir(path: &Path, config: &Config) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;

    Ok(work_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
