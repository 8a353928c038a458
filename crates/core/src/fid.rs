// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lustre file identifiers.
//!
//! Format: `0x{seq}:0x{oid}:0x{ver}`, optionally wrapped in brackets as
//! printed by `lfs path2fid`.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Size of the on-disk `struct lu_fid`.
pub const FID_SIZE: usize = 16;

/// A Lustre FID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Fid {
    /// Sequence number.
    pub seq: u64,
    /// Object id within the sequence.
    pub oid: u32,
    /// Version.
    pub ver: u32,
}

impl Fid {
    pub fn new(seq: u64, oid: u32, ver: u32) -> Self {
        Fid { seq, oid, ver }
    }

    /// Parses a FID from its string representation.
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Returns the little-endian `struct lu_fid` layout stored by the backend.
    pub fn to_bytes(&self) -> [u8; FID_SIZE] {
        let mut bytes = [0u8; FID_SIZE];
        bytes[..8].copy_from_slice(&self.seq.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.oid.to_le_bytes());
        bytes[12..].copy_from_slice(&self.ver.to_le_bytes());
        bytes
    }
}

impl fmt::Display for Fid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}:0x{:x}:0x{:x}", self.seq, self.oid, self.ver)
    }
}

impl FromStr for Fid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let inner = match s.strip_prefix('[') {
            Some(rest) => rest
                .strip_suffix(']')
                .ok_or_else(|| invalid(s, "unbalanced brackets"))?,
            None => s,
        };

        let parts: Vec<&str> = inner.split(':').collect();
        if parts.len() != 3 {
            return Err(invalid(s, "expected exactly three sections"));
        }

        let seq = hex_section(s, parts[0])?;
        let oid = hex_section(s, parts[1])?;
        let ver = hex_section(s, parts[2])?;

        let oid = u32::try_from(oid).map_err(|_| invalid(s, "object id exceeds 32 bits"))?;
        let ver = u32::try_from(ver).map_err(|_| invalid(s, "version exceeds 32 bits"))?;

        Ok(Fid::new(seq, oid, ver))
    }
}

/// Parses one `0x`-prefixed hexadecimal section.
fn hex_section(input: &str, section: &str) -> Result<u64> {
    let digits = section
        .strip_prefix("0x")
        .or_else(|| section.strip_prefix("0X"))
        .ok_or_else(|| invalid(input, "section is missing its 0x prefix"))?;

    // from_str_radix would also accept a leading '+'
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid(input, "section is not hexadecimal"));
    }

    u64::from_str_radix(digits, 16).map_err(|_| invalid(input, "section exceeds 64 bits"))
}

fn invalid(input: &str, reason: &'static str) -> Error {
    Error::InvalidIdentifier {
        input: input.to_string(),
        reason,
    }
}

#[cfg(test)]
#[path = "fid_tests.rs"]
mod tests;
