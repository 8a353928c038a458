// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is stored in `<config dir>/lfind/config.toml` and maps each
//! predicate to the backend field it filters on:
//!
//! ```toml
//! [fields]
//! ost = "xattrs.lov.ost"
//!
//! [fields.expiry]
//! absolute = "xattrs.user.expires"
//! ```
//!
//! Omitted entries keep their defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use lfind_core::Fields;
use tracing::debug;

use crate::env;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "lfind";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration read from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Backend fields targeted by each predicate.
    pub fields: Fields,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read config {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::Config(format!("failed to parse config {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    /// Find and load the configuration.
    ///
    /// An `explicit` path (from `--config`) wins, then `LFIND_CONFIG`; both
    /// must exist. Otherwise the per-user file is read when present, and
    /// defaults are used when it is not.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config from --config");
            return Config::load(path);
        }
        if let Some(path) = env::config_path() {
            debug!(path = %path.display(), "loading config from {}", env::vars::LFIND_CONFIG);
            return Config::load(&path);
        }
        match default_config_path() {
            Some(path) => Config::load_or_default(&path),
            None => {
                debug!("no config directory, using default fields");
                Ok(Config::default())
            }
        }
    }

    /// Load `path` if it exists, or return the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.is_file() {
            debug!(path = %path.display(), "loading config");
            Config::load(path)
        } else {
            debug!(path = %path.display(), "config not found, using default fields");
            Ok(Config::default())
        }
    }
}

/// `<config dir>/lfind/config.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
