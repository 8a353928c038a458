// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lustre HSM state names and their flag bits.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A symbolic HSM state, as accepted by `-hsm-state`.
///
/// Every state except [`HsmState::None`] is a single bit of the stored flag
/// word; `None` means no bit is set at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HsmState {
    /// No HSM state recorded.
    None,
    /// A copy exists in the archive.
    Exists,
    /// The file changed since it was archived.
    Dirty,
    /// File data was released from the filesystem.
    Released,
    /// The archive copy is up to date.
    Archived,
    /// The file must never be released.
    NoRelease,
    /// The file must never be archived.
    NoArchive,
    /// The archive copy is lost.
    Lost,
}

impl HsmState {
    /// All states, in flag order.
    pub const ALL: [HsmState; 8] = [
        HsmState::None,
        HsmState::Exists,
        HsmState::Dirty,
        HsmState::Released,
        HsmState::Archived,
        HsmState::NoRelease,
        HsmState::NoArchive,
        HsmState::Lost,
    ];

    /// Returns the name accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            HsmState::None => "none",
            HsmState::Exists => "exists",
            HsmState::Dirty => "dirty",
            HsmState::Released => "released",
            HsmState::Archived => "archived",
            HsmState::NoRelease => "norelease",
            HsmState::NoArchive => "noarchive",
            HsmState::Lost => "lost",
        }
    }

    /// Returns the flag bit stored by Lustre (`HS_*` in `lustre_user.h`).
    pub fn flag(&self) -> u32 {
        match self {
            HsmState::None => 0,
            HsmState::Exists => 0x0000_0001,
            HsmState::Dirty => 0x0000_0002,
            HsmState::Released => 0x0000_0004,
            HsmState::Archived => 0x0000_0008,
            HsmState::NoRelease => 0x0000_0010,
            HsmState::NoArchive => 0x0000_0020,
            HsmState::Lost => 0x0000_0040,
        }
    }
}

impl fmt::Display for HsmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HsmState {
    type Err = Error;

    // Names are case-sensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(HsmState::None),
            "exists" => Ok(HsmState::Exists),
            "dirty" => Ok(HsmState::Dirty),
            "released" => Ok(HsmState::Released),
            "archived" => Ok(HsmState::Archived),
            "norelease" => Ok(HsmState::NoRelease),
            "noarchive" => Ok(HsmState::NoArchive),
            "lost" => Ok(HsmState::Lost),
            _ => Err(Error::UnknownSymbol(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "hsm_tests.rs"]
mod tests;
