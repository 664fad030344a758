//! Dotted field paths and the typed values they resolve to.
//!
//! Sorting and generic cell rendering address record fields by a dotted
//! path such as `"name"`, `"price"`, or `"category.name"`. Resolution is
//! explicit and reflection-free: each record type matches on the path
//! segments and returns a typed [`FieldValue`], with [`FieldValue::Absent`]
//! as the total fallback for paths that address nothing.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A dotted path addressing a field on a record.
///
/// Any string is a valid path. A path that addresses nothing resolves to
/// [`FieldValue::Absent`] at access time rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    /// Returns the raw dotted path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the dot-separated path components.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FieldPath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FieldPath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A typed view of one record field, borrowed from the record.
///
/// Carries a total ordering for the sort stage: numbers before text before
/// booleans, with [`FieldValue::Absent`] greatest so missing fields sort
/// last. Text compares case-sensitively; case folding for search is the
/// pipeline's concern, not the value's.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// A textual field.
    Text(&'a str),
    /// A numeric field. Integer fields widen to f64.
    Number(f64),
    /// A boolean field.
    Bool(bool),
    /// The path addressed nothing on this record.
    Absent,
}

impl FieldValue<'_> {
    /// True when the path addressed nothing.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Total comparison used by the sort stage.
    ///
    /// Values of the same type compare naturally, with `f64::total_cmp`
    /// for numbers so NaN is ordered too. Values of different types
    /// compare by a fixed rank, so any pair of fields has a defined order.
    ///
    /// This is not an `Ord` impl: the float variant cannot satisfy the
    /// `Eq` bound the trait requires.
    #[must_use]
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Number(_) => 0,
            FieldValue::Text(_) => 1,
            FieldValue::Bool(_) => 2,
            FieldValue::Absent => 3,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Absent => Ok(()),
        }
    }
}
