//! Literal value codecs.
//!
//! Each Rust payload type used by a literal property kind implements
//! [`Literal`]: its natural order, its canonical tree form, and the reverse
//! conversion used when reading documents.
//!
//! | Kind | Payload | Tree form |
//! |------|---------|-----------|
//! | `xsd:string`, `rfc:rfc2045`, `rfc:bcp47`, `rfc:rfc5988` | `String` | string |
//! | `xsd:anyURI` | `Iri` | string |
//! | `xsd:float` | `f64` | number |
//! | `xsd:nonNegativeInteger` | `u64` | integer |
//! | `xsd:dateTime` | `DateTime<Utc>` | RFC 3339 string |

use std::cmp::Ordering;

use chrono::{DateTime, SecondsFormat, Utc};

use super::tree::{type_name, TreeValue};
use super::Iri;
use crate::{Error, Result};

/// A literal payload with a total order and a tree codec.
pub trait Literal: Sized {
    fn compare(&self, other: &Self) -> Ordering;
    fn serialize(&self) -> Result<TreeValue>;
    fn deserialize(tree: &TreeValue) -> Result<Self>;
}

fn type_error(expected: &str, tree: &TreeValue) -> Error {
    Error::TypeError {
        expected: expected.to_string(),
        got: type_name(tree).to_string(),
    }
}

// ============================================================================
// Text
// ============================================================================

impl Literal for String {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn serialize(&self) -> Result<TreeValue> {
        Ok(TreeValue::String(self.clone()))
    }

    fn deserialize(tree: &TreeValue) -> Result<Self> {
        tree.as_str()
            .map(str::to_owned)
            .ok_or_else(|| type_error("string", tree))
    }
}

impl Literal for Iri {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn serialize(&self) -> Result<TreeValue> {
        Ok(TreeValue::String(self.as_str().to_owned()))
    }

    fn deserialize(tree: &TreeValue) -> Result<Self> {
        let s = tree.as_str().ok_or_else(|| type_error("string", tree))?;
        Iri::parse(s)
    }
}

// ============================================================================
// Numbers
// ============================================================================

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

impl Literal for f64 {
    /// Total order with the two zeros equal, since both are written as `0`.
    fn compare(&self, other: &Self) -> Ordering {
        // Adding +0.0 turns -0.0 into +0.0 and leaves every other value alone.
        (self + 0.0).total_cmp(&(other + 0.0))
    }

    /// Integral values are written without a fractional part (`15`, not `15.0`).
    fn serialize(&self) -> Result<TreeValue> {
        if !self.is_finite() {
            return Err(Error::Unrepresentable(format!("{self} is not a finite number")));
        }
        if self.fract() == 0.0 && self.abs() <= MAX_EXACT_INT {
            return Ok(TreeValue::from(*self as i64));
        }
        serde_json::Number::from_f64(*self)
            .map(TreeValue::Number)
            .ok_or_else(|| Error::Unrepresentable(self.to_string()))
    }

    fn deserialize(tree: &TreeValue) -> Result<Self> {
        tree.as_f64().ok_or_else(|| type_error("number", tree))
    }
}

impl Literal for u64 {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn serialize(&self) -> Result<TreeValue> {
        Ok(TreeValue::from(*self))
    }

    fn deserialize(tree: &TreeValue) -> Result<Self> {
        tree.as_u64()
            .ok_or_else(|| type_error("non-negative integer", tree))
    }
}

// ============================================================================
// Temporal
// ============================================================================

impl Literal for DateTime<Utc> {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn serialize(&self) -> Result<TreeValue> {
        Ok(TreeValue::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
    }

    fn deserialize(tree: &TreeValue) -> Result<Self> {
        let s = tree.as_str().ok_or_else(|| type_error("dateTime string", tree))?;
        DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| Error::TypeError {
                expected: "RFC 3339 dateTime".to_string(),
                got: format!("{s:?} ({e})"),
            })
    }
}
