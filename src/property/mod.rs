//! # Property Cells
//!
//! The generic storage unit every vocabulary property instantiates.
//!
//! A vocabulary term is described by a zero-sized marker implementing
//! [`Property`] and a value enum implementing [`PropertyValue`]; both are
//! generated by the `vocab_property!` table in `crate::vocab::properties`.
//! [`PropertyCell`] then supplies storage, ordering, context resolution and
//! serialization once for all of them.
//!
//! ```text
//! Kind registry ← PropertyCell ← Context resolver
//!                      ↑
//!               Tree serializer → Entity::serialize (nested)
//! ```

pub mod kind;
pub mod cell;
pub mod order;
pub mod context;
pub mod serialize;
pub mod list;

use std::cmp::Ordering;
use std::fmt;

use crate::model::{ContextMap, TreeValue};
use crate::{Error, Result};

pub use cell::PropertyCell;
pub use kind::{kinds, Kind};
pub use list::PropertyList;
pub use order::normalize;

/// A vocabulary term: its name, its namespace and its permitted values.
pub trait Property: fmt::Debug + Clone + PartialEq + 'static {
    /// The bare term, e.g. `"units"`.
    const NAME: &'static str;
    /// Namespace URI the term belongs to.
    const NAMESPACE: &'static str;
    /// The non-IRI values this property may hold.
    type Value: PropertyValue;
}

/// The closed set of non-IRI values a property may hold.
///
/// Variants are ranked by declaration order: `ordinal()` is the position
/// of the populated variant in [`Self::KINDS`].
pub trait PropertyValue: fmt::Debug + Clone + PartialEq + Sized {
    /// Diagnostic names of the variants, in rank order.
    const KINDS: &'static [&'static str];

    fn ordinal(&self) -> usize;

    /// Total order; values of different variants compare by ordinal.
    fn compare(&self, other: &Self) -> Ordering;

    fn serialize(&self) -> Result<TreeValue>;

    /// Namespaces required by the value itself (nested entities only).
    fn jsonld_context(&self) -> ContextMap;

    /// Try every variant in rank order. When none accepts `tree`, the error
    /// is the most specific rejection seen (see [`keep_rejection`]).
    fn deserialize(tree: &TreeValue, aliases: &ContextMap) -> Result<Self>;

    /// Normalize a nested entity's multi-valued properties. No-op for
    /// literals.
    fn normalize(&mut self);

    /// Re-alias a nested entity. No-op for literals.
    fn set_alias(&mut self, alias: &str);
}

/// Record a variant's rejection, keeping the one that best explains the
/// failure. A shape mismatch (`TypeError`) never displaces an error raised
/// after the shape matched, such as a nested entity with a bad field.
pub(crate) fn keep_rejection(kept: &mut Option<Error>, error: Error) {
    let replace = match kept {
        None | Some(Error::TypeError { .. }) => true,
        Some(_) => !matches!(error, Error::TypeError { .. }),
    };
    if replace {
        *kept = Some(error);
    }
}
