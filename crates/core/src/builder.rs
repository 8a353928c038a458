// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Builders turning predicate values into filter trees.
//!
//! Every builder takes the raw value and the field it applies to, and returns
//! an owned [`FilterExpr`] or an error; no partial tree is ever returned.

use crate::error::{Error, Result};
use crate::fid::Fid;
use crate::fields::ExpiryFields;
use crate::filter::{CompareOp, Field, FilterExpr, FilterValue, Operand};
use crate::hsm::HsmState;
use crate::range_set::{Disjunct, RangeSet};

/// Builds `field in {n}` for each value and `field >= begin && field <= end`
/// for each range, OR-ed together in input order.
///
/// # Errors
///
/// Returns [`Error::EmptyRangeSet`] for `[]`: an OR of nothing has no sound
/// representation.
pub fn build_from_range_set(set: RangeSet, field: &Field) -> Result<FilterExpr> {
    FilterExpr::any(set.into_iter().map(|disjunct| match disjunct {
        Disjunct::Single(value) => member_of(field, value),
        Disjunct::Range { begin, end } => FilterExpr::and(
            FilterExpr::compare(
                field.clone(),
                CompareOp::GreaterOrEqual,
                FilterValue::Uint64(begin),
            ),
            FilterExpr::compare(
                field.clone(),
                CompareOp::LessOrEqual,
                FilterValue::Uint64(end),
            ),
        ),
    }))
    .ok_or(Error::EmptyRangeSet)
}

/// Builds `field in {n}` from a plain decimal integer.
///
/// Unlike range sets, the value may use the full 64 bits. Signs are rejected.
pub fn build_from_scalar(text: &str, field: &Field) -> Result<FilterExpr> {
    // u64::from_str accepts a leading '+'; the sign alone fails as InvalidDigit
    let digits = match text.strip_prefix('+') {
        Some(_) => "+",
        None => text,
    };
    let value = digits.parse::<u64>().map_err(|source| Error::NotANumber {
        input: text.to_string(),
        source,
    })?;

    Ok(member_of(field, value))
}

/// Builds an HSM state filter.
///
/// Named states test whether their bit is set; `none` requires the whole
/// flag word to be zero.
pub fn build_from_symbol(text: &str, field: &Field) -> Result<FilterExpr> {
    let state: HsmState = text.parse()?;

    Ok(match state {
        HsmState::None => {
            FilterExpr::compare(field.clone(), CompareOp::Equal, FilterValue::Uint32(0))
        }
        state => FilterExpr::compare(
            field.clone(),
            CompareOp::BitsAnySet,
            FilterValue::Uint32(state.flag()),
        ),
    })
}

/// Builds `field == <lu_fid bytes>` from a FID such as `0x200000007:0x1:0x0`.
pub fn build_from_identifier(text: &str, field: &Field) -> Result<FilterExpr> {
    let fid = Fid::parse(text)?;

    Ok(FilterExpr::compare(
        field.clone(),
        CompareOp::Equal,
        FilterValue::Binary(fid.to_bytes().to_vec()),
    ))
}

/// Builds the "expired before epoch" filter.
///
/// The epoch is `text` when given, `now` otherwise. A file expired when its
/// absolute expiration date, or any of its timestamps plus its expiration
/// delay, is at or before the epoch.
pub fn build_expiration_filter(
    text: Option<&str>,
    now: i64,
    fields: &ExpiryFields,
) -> Result<FilterExpr> {
    let epoch = match text {
        Some(text) => parse_epoch(text)?,
        None => FilterValue::Int64(now),
    };

    let absolute = FilterExpr::compare(
        fields.absolute.clone(),
        CompareOp::LessOrEqual,
        epoch.clone(),
    );

    let relative = fields.timestamps().into_iter().map(|timestamp| {
        FilterExpr::compare(
            Operand::Sum {
                base: timestamp.clone(),
                offset: fields.delay.clone(),
            },
            CompareOp::LessOrEqual,
            epoch.clone(),
        )
    });

    Ok(relative.fold(absolute, FilterExpr::or))
}

/// Parses an epoch literal: signed when it fits `i64`, unsigned above that.
fn parse_epoch(text: &str) -> Result<FilterValue> {
    match text.parse::<i64>() {
        Ok(epoch) => Ok(FilterValue::Int64(epoch)),
        Err(source) => text
            .parse::<u64>()
            .map(FilterValue::Uint64)
            .map_err(|_| Error::InvalidExpiry {
                input: text.to_string(),
                source,
            }),
    }
}

fn member_of(field: &Field, value: u64) -> FilterExpr {
    FilterExpr::compare(
        field.clone(),
        CompareOp::MemberOf,
        FilterValue::Sequence(vec![FilterValue::Uint64(value)]),
    )
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
