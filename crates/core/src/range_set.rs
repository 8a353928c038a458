// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compact range-set notation.
//!
//! A range set is a bracketed, comma-separated list of integers and inclusive
//! integer ranges:
//!
//! ```text
//! []            # explicitly empty
//! [3]           # a single value
//! [1,2-5,9]     # values and ranges, in input order
//! ```
//!
//! Values identify storage targets and are limited to `u32::MAX`, even though
//! they are stored as `u64`.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// One comma-separated element of a range set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Disjunct {
    /// A single value.
    Single(u64),
    /// An inclusive range. `begin <= end` is not checked.
    Range { begin: u64, end: u64 },
}

impl fmt::Display for Disjunct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disjunct::Single(value) => write!(f, "{value}"),
            Disjunct::Range { begin, end } => write!(f, "{begin}-{end}"),
        }
    }
}

/// A parsed range set, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RangeSet {
    disjuncts: Vec<Disjunct>,
}

impl RangeSet {
    /// Parses a range set such as `[1,2-5]`.
    pub fn parse(input: &str) -> Result<Self> {
        input.parse()
    }

    pub fn disjuncts(&self) -> &[Disjunct] {
        &self.disjuncts
    }

    pub fn len(&self) -> usize {
        self.disjuncts.len()
    }

    /// Returns true for `[]`.
    pub fn is_empty(&self) -> bool {
        self.disjuncts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Disjunct> {
        self.disjuncts.iter()
    }
}

impl From<Vec<Disjunct>> for RangeSet {
    fn from(disjuncts: Vec<Disjunct>) -> Self {
        RangeSet { disjuncts }
    }
}

impl IntoIterator for RangeSet {
    type Item = Disjunct;
    type IntoIter = std::vec::IntoIter<Disjunct>;

    fn into_iter(self) -> Self::IntoIter {
        self.disjuncts.into_iter()
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a Disjunct;
    type IntoIter = std::slice::Iter<'a, Disjunct>;

    fn into_iter(self) -> Self::IntoIter {
        self.disjuncts.iter()
    }
}

impl fmt::Display for RangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, disjunct) in self.disjuncts.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{disjunct}")?;
        }
        f.write_str("]")
    }
}

impl FromStr for RangeSet {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let mut rest = input
            .strip_prefix('[')
            .ok_or_else(|| invalid(input, "must start with '['"))?;

        if rest.starts_with(']') {
            return Ok(RangeSet::default());
        }

        let mut disjuncts = Vec::new();
        loop {
            let (begin, after) = bound(input, rest)?;
            rest = after;

            let disjunct = match rest.strip_prefix('-') {
                Some(after) => {
                    let (end, after) = bound(input, after)?;
                    rest = after;
                    Disjunct::Range { begin, end }
                }
                None => Disjunct::Single(begin),
            };
            disjuncts.push(disjunct);

            let mut chars = rest.chars();
            match chars.next() {
                Some(',') => rest = chars.as_str(),
                // Anything after the closing bracket is not part of the set.
                Some(']') => return Ok(RangeSet { disjuncts }),
                Some('-') => return Err(invalid(input, "a range has at most one '-'")),
                Some(_) => return Err(invalid(input, "unexpected character")),
                None => return Err(invalid(input, "missing closing ']'")),
            }
        }
    }
}

/// Parses one integer at the start of `rest`.
///
/// Every disjunct and every range end must start with a digit, so this is
/// where `[-1]`, `[,]`, `[1,,2]`, `[1,]` and `[1-]` are rejected.
fn bound<'i>(input: &str, rest: &'i str) -> Result<(u64, &'i str)> {
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    if end == 0 {
        let reason = match rest.chars().next() {
            Some('-') => "range is missing its first value",
            Some(',') => "empty element",
            Some(']') => "expected a value before ']'",
            Some(_) => "unexpected character",
            None => "missing closing ']'",
        };
        return Err(invalid(input, reason));
    }

    let digits = &rest[..end];
    let value = digits
        .parse::<u64>()
        .ok()
        .filter(|value| *value <= u64::from(u32::MAX))
        .ok_or_else(|| Error::OutOfRange {
            input: input.to_string(),
            value: digits.to_string(),
        })?;

    Ok((value, &rest[end..]))
}

fn invalid(input: &str, reason: &'static str) -> Error {
    Error::InvalidFormat {
        input: input.to_string(),
        reason,
    }
}

#[cfg(test)]
#[path = "range_set_tests.rs"]
mod tests;
