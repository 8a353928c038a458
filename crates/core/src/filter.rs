// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter expression tree handed to the query backend.
//!
//! A filter is built from three primitives: a comparison of a field against a
//! value, and the binary `and` / `or` combinators. The text rendering looks
//! like:
//!
//! ```text
//! (xattrs.ost in {1} || (xattrs.ost >= 2 && xattrs.ost <= 5))
//! ```

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Where the backend stores an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// `statx(2)` attributes (`statx.size`, `statx.atime.sec`, ...).
    Statx,
    /// Extended attributes attached to the inode.
    InodeXattrs,
    /// Extended attributes attached to a namespace entry.
    NamespaceXattrs,
}

impl Namespace {
    /// Returns the prefix used in field paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Statx => "statx",
            Namespace::InodeXattrs => "xattrs",
            Namespace::NamespaceXattrs => "ns-xattrs",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifies the attribute a comparison targets.
///
/// Written as `<namespace>.<name>`, e.g. `xattrs.fid` or `statx.atime.sec`.
/// The name itself may contain dots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    pub namespace: Namespace,
    pub name: String,
}

impl Field {
    pub fn new(namespace: Namespace, name: impl Into<String>) -> Self {
        Field {
            namespace,
            name: name.into(),
        }
    }

    pub fn statx(name: impl Into<String>) -> Self {
        Field::new(Namespace::Statx, name)
    }

    pub fn xattr(name: impl Into<String>) -> Self {
        Field::new(Namespace::InodeXattrs, name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

/// Error returned when a field path cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid field '{0}'\n  hint: expected <namespace>.<name> with namespace one of: statx, xattrs, ns-xattrs")]
pub struct FieldParseError(pub String);

impl FromStr for Field {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, name) = s
            .split_once('.')
            .ok_or_else(|| FieldParseError(s.to_string()))?;

        let namespace = match namespace {
            "statx" => Namespace::Statx,
            "xattrs" => Namespace::InodeXattrs,
            "ns-xattrs" => Namespace::NamespaceXattrs,
            _ => return Err(FieldParseError(s.to_string())),
        };

        if name.is_empty() {
            return Err(FieldParseError(s.to_string()));
        }

        Ok(Field::new(namespace, name))
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        let s = String::deserialize(de)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Left-hand side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Operand {
    /// The stored value of a field.
    Field(Field),
    /// The sum of two stored values, e.g. a timestamp plus a stored delay.
    Sum { base: Field, offset: Field },
}

impl From<Field> for Operand {
    fn from(field: Field) -> Self {
        Operand::Field(field)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Field(field) => write!(f, "{field}"),
            Operand::Sum { base, offset } => write!(f, "{base} + {offset}"),
        }
    }
}

/// Comparison operators understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    /// Exact equality.
    Equal,
    /// The field equals one of a small set of values.
    MemberOf,
    /// The field shares at least one set bit with the value.
    BitsAnySet,
    /// Greater than or equal (`>=`).
    GreaterOrEqual,
    /// Less than or equal (`<=`).
    LessOrEqual,
}

impl CompareOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Equal => "==",
            CompareOp::MemberOf => "in",
            CompareOp::BitsAnySet => "&",
            CompareOp::GreaterOrEqual => ">=",
            CompareOp::LessOrEqual => "<=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Scalar and set values a comparison can hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FilterValue {
    Uint32(u32),
    Uint64(u64),
    Int64(i64),
    #[serde(serialize_with = "serialize_hex")]
    Binary(Vec<u8>),
    String(String),
    /// A small value set, used with [`CompareOp::MemberOf`].
    Sequence(Vec<FilterValue>),
}

fn serialize_hex<S: Serializer>(bytes: &[u8], ser: S) -> Result<S::Ok, S::Error> {
    ser.serialize_str(&hex::encode(bytes))
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Uint32(value) => write!(f, "{value}"),
            FilterValue::Uint64(value) => write!(f, "{value}"),
            FilterValue::Int64(value) => write!(f, "{value}"),
            FilterValue::Binary(bytes) => write!(f, "0x{}", hex::encode(bytes)),
            FilterValue::String(value) => write!(f, "{value:?}"),
            FilterValue::Sequence(values) => {
                f.write_str("{")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// A boolean filter over backend-stored attributes.
///
/// Each node owns its children; trees are built bottom-up and never shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterExpr {
    Compare {
        lhs: Operand,
        op: CompareOp,
        value: FilterValue,
    },
    And {
        left: Box<FilterExpr>,
        right: Box<FilterExpr>,
    },
    Or {
        left: Box<FilterExpr>,
        right: Box<FilterExpr>,
    },
}

impl FilterExpr {
    pub fn compare(lhs: impl Into<Operand>, op: CompareOp, value: FilterValue) -> Self {
        FilterExpr::Compare {
            lhs: lhs.into(),
            op,
            value,
        }
    }

    pub fn and(left: FilterExpr, right: FilterExpr) -> Self {
        FilterExpr::And {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn or(left: FilterExpr, right: FilterExpr) -> Self {
        FilterExpr::Or {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Folds filters left to right with `and`. Returns `None` when empty.
    pub fn all(filters: impl IntoIterator<Item = FilterExpr>) -> Option<Self> {
        filters.into_iter().reduce(FilterExpr::and)
    }

    /// Folds filters left to right with `or`. Returns `None` when empty.
    pub fn any(filters: impl IntoIterator<Item = FilterExpr>) -> Option<Self> {
        filters.into_iter().reduce(FilterExpr::or)
    }

    /// Number of comparison leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            FilterExpr::Compare { .. } => 1,
            FilterExpr::And { left, right } | FilterExpr::Or { left, right } => {
                left.leaf_count() + right.leaf_count()
            }
        }
    }
}

impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterExpr::Compare { lhs, op, value } => write!(f, "{lhs} {op} {value}"),
            FilterExpr::And { left, right } => write!(f, "({left} && {right})"),
            FilterExpr::Or { left, right } => write!(f, "({left} || {right})"),
        }
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
