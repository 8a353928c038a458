// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Predicate registry.
//!
//! Maps each command-line predicate to its builder and tells whether it takes
//! a value:
//!
//! ```text
//! -fid 0x200000007:0x1:0x0      # file with this FID
//! -hsm-state archived           # HSM state bit set (or `none`)
//! -ost [0,4-7]                  # objects on any of these OSTs
//! -ost 3                        # objects on OST 3
//! -expired                      # expired now
//! -expired-at 1700000000        # expired at this epoch
//! ```

use std::fmt;

use crate::builder::{
    build_expiration_filter, build_from_identifier, build_from_range_set, build_from_scalar,
    build_from_symbol,
};
use crate::error::{Error, Result};
use crate::fields::Fields;
use crate::filter::FilterExpr;
use crate::range_set::RangeSet;

/// Everything a builder needs besides the predicate value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub fields: Fields,
    /// Current time, in epoch seconds.
    pub now: i64,
}

impl Context {
    pub fn new(fields: Fields, now: i64) -> Self {
        Context { fields, now }
    }
}

type BuildFn = fn(&Context, Option<&str>) -> Result<FilterExpr>;

/// A registered predicate.
#[derive(Clone, Copy)]
pub struct PredicateSpec {
    /// Name including the leading dash, e.g. `-ost`.
    pub name: &'static str,
    /// Whether the predicate consumes the next argument as its value.
    pub takes_argument: bool,
    build: BuildFn,
}

impl PredicateSpec {
    /// Builds the filter for this predicate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArgument`] when the predicate takes a value and
    /// none is given, or the builder's error.
    pub fn build(&self, ctx: &Context, arg: Option<&str>) -> Result<FilterExpr> {
        if self.takes_argument && arg.is_none() {
            return Err(Error::MissingArgument {
                predicate: self.name,
            });
        }
        (self.build)(ctx, arg)
    }
}

impl fmt::Debug for PredicateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateSpec")
            .field("name", &self.name)
            .field("takes_argument", &self.takes_argument)
            .finish_non_exhaustive()
    }
}

static PREDICATES: &[PredicateSpec] = &[
    PredicateSpec {
        name: "-expired",
        takes_argument: false,
        build: expired,
    },
    PredicateSpec {
        name: "-expired-at",
        takes_argument: true,
        build: expired,
    },
    PredicateSpec {
        name: "-fid",
        takes_argument: true,
        build: fid,
    },
    PredicateSpec {
        name: "-hsm-state",
        takes_argument: true,
        build: hsm_state,
    },
    PredicateSpec {
        name: "-ost",
        takes_argument: true,
        build: ost,
    },
];

fn expired(ctx: &Context, arg: Option<&str>) -> Result<FilterExpr> {
    build_expiration_filter(arg, ctx.now, &ctx.fields.expiry)
}

fn fid(ctx: &Context, arg: Option<&str>) -> Result<FilterExpr> {
    build_from_identifier(arg.unwrap_or_default(), &ctx.fields.fid)
}

fn hsm_state(ctx: &Context, arg: Option<&str>) -> Result<FilterExpr> {
    build_from_symbol(arg.unwrap_or_default(), &ctx.fields.hsm_state)
}

/// `-ost` takes either a range set or a single index.
fn ost(ctx: &Context, arg: Option<&str>) -> Result<FilterExpr> {
    let text = arg.unwrap_or_default();
    if !text.starts_with('[') {
        return build_from_scalar(text, &ctx.fields.ost);
    }

    let set = RangeSet::parse(text)?;
    if set.is_empty() {
        return Err(Error::EmptyRangeSet);
    }
    build_from_range_set(set, &ctx.fields.ost)
}

/// Looks up a predicate by name, e.g. `-hsm-state`.
pub fn lookup(name: &str) -> Option<&'static PredicateSpec> {
    PREDICATES.iter().find(|spec| spec.name == name)
}

/// Returns every registered predicate.
pub fn predicates() -> &'static [PredicateSpec] {
    PREDICATES
}

/// Translates a command line of predicates into a single filter.
///
/// Predicates are AND-ed in order. Returns `Ok(None)` when `args` is empty,
/// which matches everything.
///
/// # Errors
///
/// Returns [`Error::UnknownPredicate`] for an unregistered name,
/// [`Error::MissingArgument`] when the value is missing, or the first builder
/// error.
pub fn translate<S: AsRef<str>>(args: &[S], ctx: &Context) -> Result<Option<FilterExpr>> {
    let mut filters = Vec::new();
    let mut args = args.iter().map(|arg| arg.as_ref());

    while let Some(name) = args.next() {
        let spec = lookup(name).ok_or_else(|| Error::UnknownPredicate(name.to_string()))?;
        let arg = if spec.takes_argument { args.next() } else { None };
        filters.push(spec.build(ctx, arg)?);
    }

    Ok(FilterExpr::all(filters))
}

#[cfg(test)]
#[path = "predicate_tests.rs"]
mod tests;
