// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Backend fields targeted by each predicate.
//!
//! The defaults match the attributes written by the Lustre enrichers; every
//! entry can be overridden from the `[fields]` table of the configuration.

use serde::{Deserialize, Serialize};

use crate::filter::Field;

/// Fields used by the predicate registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Fields {
    /// Binary `lu_fid` of the inode (`-fid`).
    pub fid: Field,
    /// HSM flag word (`-hsm-state`).
    pub hsm_state: Field,
    /// OST indexes holding the file's objects (`-ost`).
    pub ost: Field,
    /// Fields read by `-expired` and `-expired-at`.
    pub expiry: ExpiryFields,
}

impl Default for Fields {
    fn default() -> Self {
        Fields {
            fid: Field::xattr("fid"),
            hsm_state: Field::xattr("hsm_state"),
            ost: Field::xattr("ost"),
            expiry: ExpiryFields::default(),
        }
    }
}

/// Fields used to decide whether a file expired.
///
/// A file carries either an absolute expiration date, or a delay that is
/// added to each of its access, change and modification times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpiryFields {
    /// Absolute expiration date, in epoch seconds.
    pub absolute: Field,
    /// Expiration delay relative to the timestamps below, in seconds.
    pub delay: Field,
    pub atime: Field,
    pub ctime: Field,
    pub mtime: Field,
}

impl ExpiryFields {
    /// The timestamps a relative expiration delay applies to.
    pub fn timestamps(&self) -> [&Field; 3] {
        [&self.atime, &self.ctime, &self.mtime]
    }
}

impl Default for ExpiryFields {
    fn default() -> Self {
        ExpiryFields {
            absolute: Field::xattr("trusted.expiration_date"),
            delay: Field::xattr("trusted.expiration_delay"),
            atime: Field::statx("atime.sec"),
            ctime: Field::statx("ctime.sec"),
            mtime: Field::statx("mtime.sec"),
        }
    }
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
