//! PropertyCell: mutually exclusive storage for one property value.

use std::marker::PhantomData;

use super::{Kind, Property, PropertyValue};
use crate::model::Iri;
use crate::vocab::qualify;

#[derive(Debug, Clone, PartialEq)]
enum Slot<V> {
    Unset,
    Iri(Iri),
    Value(V),
}

/// Holds at most one populated variant of property `P`.
///
/// Every mutator replaces whatever was stored before, so `has_any()` is
/// true iff exactly one variant is populated. Readers for a variant that
/// is not populated return `None`; check `is_*` or [`Self::kind`] first
/// when the distinction matters.
///
/// The cell also remembers the alias its namespace was imported under.
/// The alias affects the serialized key and the context contribution, not
/// the value: [`Self::compare`] ignores it.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyCell<P: Property> {
    slot: Slot<P::Value>,
    alias: String,
    _property: PhantomData<P>,
}

impl<P: Property> Default for PropertyCell<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Property> PropertyCell<P> {
    /// An empty cell with no alias.
    pub fn new() -> Self {
        Self {
            slot: Slot::Unset,
            alias: String::new(),
            _property: PhantomData,
        }
    }

    /// An empty cell whose namespace is imported under `alias`.
    pub fn with_alias(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            ..Self::new()
        }
    }

    pub fn from_value(value: P::Value) -> Self {
        let mut cell = Self::new();
        cell.set(value);
        cell
    }

    pub fn from_iri(iri: Iri) -> Self {
        let mut cell = Self::new();
        cell.set_iri(iri);
        cell
    }

    // ========================================================================
    // Identity
    // ========================================================================

    /// The bare vocabulary term.
    pub fn name(&self) -> &'static str {
        P::NAME
    }

    /// The key this cell serializes under: `alias:term`, or the bare term
    /// when the alias is empty.
    pub fn qualified_name(&self) -> String {
        qualify(&self.alias, P::NAME)
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Set the alias of the property's namespace. A held entity is
    /// re-aliased with it.
    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = alias.into();
        if let Slot::Value(value) = &mut self.slot {
            value.set_alias(&self.alias);
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Discard any value. Idempotent.
    pub fn clear(&mut self) {
        self.slot = Slot::Unset;
    }

    /// Store `value`, replacing any IRI or other value. A nested entity
    /// takes on the cell's alias.
    pub fn set(&mut self, mut value: P::Value) {
        value.set_alias(&self.alias);
        self.slot = Slot::Value(value);
    }

    /// Store an IRI, replacing any value.
    pub fn set_iri(&mut self, iri: Iri) {
        self.slot = Slot::Iri(iri);
    }

    /// Remove and return the populated value, leaving the cell unset.
    pub fn take(&mut self) -> Option<P::Value> {
        match std::mem::replace(&mut self.slot, Slot::Unset) {
            Slot::Value(value) => Some(value),
            other => {
                self.slot = other;
                None
            }
        }
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    pub fn has_any(&self) -> bool {
        !matches!(self.slot, Slot::Unset)
    }

    pub fn is_iri(&self) -> bool {
        matches!(self.slot, Slot::Iri(_))
    }

    /// The IRI, if the IRI variant is populated.
    pub fn iri(&self) -> Option<&Iri> {
        match &self.slot {
            Slot::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// The non-IRI value, if one is populated.
    pub fn value(&self) -> Option<&P::Value> {
        match &self.slot {
            Slot::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut P::Value> {
        match &mut self.slot {
            Slot::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn kind(&self) -> Kind {
        match &self.slot {
            Slot::Unset => Kind::Unset,
            Slot::Iri(_) => Kind::Iri,
            Slot::Value(value) => Kind::Value(value.ordinal()),
        }
    }

    /// Rank of the populated kind; see [`super::kind`].
    pub fn kind_index(&self) -> usize {
        self.kind().index()
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind().name::<P>()
    }
}
