// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lfind-core: predicate translation for Lustre-aware metadata search.
//!
//! This crate turns command-line predicate values (range sets, FIDs, HSM
//! states, expiration epochs) into [`FilterExpr`] trees for a query backend.
//! It performs no I/O and never reads the clock: "now" is always passed in.

pub mod builder;
pub mod error;
pub mod fid;
pub mod fields;
pub mod filter;
pub mod hsm;
pub mod predicate;
pub mod range_set;

pub use builder::{
    build_expiration_filter, build_from_identifier, build_from_range_set, build_from_scalar,
    build_from_symbol,
};
pub use error::{Error, Result};
pub use fid::Fid;
pub use fields::{ExpiryFields, Fields};
pub use filter::{CompareOp, Field, FieldParseError, FilterExpr, FilterValue, Namespace, Operand};
pub use hsm::HsmState;
pub use predicate::{translate, Context, PredicateSpec};
pub use range_set::{Disjunct, RangeSet};
