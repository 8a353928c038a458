// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for predicate translation.

use std::num::ParseIntError;

use thiserror::Error;

/// All possible errors that can occur while translating a predicate value.
///
/// Every variant carries the offending input so the caller can build a usage
/// diagnostic without keeping the original string around.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid range set '{input}': {reason}")]
    InvalidFormat { input: String, reason: &'static str },

    #[error("invalid range set '{input}': {value} exceeds {max}", max = u32::MAX)]
    OutOfRange { input: String, value: String },

    #[error("'{input}' is not a number: {source}")]
    NotANumber {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unknown HSM state: '{0}'\n  hint: valid states are: archived, dirty, exists, lost, noarchive, none, norelease, released")]
    UnknownSymbol(String),

    #[error("invalid FID '{input}': {reason}\n  hint: expected 0xSEQ:0xOID:0xVER")]
    InvalidIdentifier { input: String, reason: &'static str },

    #[error("invalid expiration epoch '{input}': {source}")]
    InvalidExpiry {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("empty range set '[]' matches nothing\n  hint: list at least one value, e.g. [0] or [0-3]")]
    EmptyRangeSet,

    #[error("unknown predicate: '{0}'")]
    UnknownPredicate(String),

    #[error("missing argument to '{predicate}'")]
    MissingArgument { predicate: &'static str },
}

/// A specialized Result type for predicate translation.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
