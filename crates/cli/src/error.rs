// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::num::ParseIntError;

use thiserror::Error;

/// `EX_USAGE`: the command line could not be translated.
pub const EXIT_USAGE: i32 = 64;
/// `EX_SOFTWARE`: output could not be rendered.
pub const EXIT_SOFTWARE: i32 = 70;
/// `EX_IOERR`: reading input or writing output failed.
pub const EXIT_IO: i32 = 74;
/// `EX_CONFIG`: the configuration file is unreadable or invalid.
pub const EXIT_CONFIG: i32 = 78;

/// All errors the `lfind` binary can report.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Translate(#[from] lfind_core::Error),

    #[error("invalid 'now' value '{value}': {source}\n  hint: use epoch seconds, e.g. 1700000000")]
    InvalidNow {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Translate(_) | Error::InvalidNow { .. } => EXIT_USAGE,
            Error::Config(_) => EXIT_CONFIG,
            Error::Io(_) => EXIT_IO,
            Error::Json(_) => EXIT_SOFTWARE,
        }
    }
}

/// A specialized Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
