//! Total order over cells of the same property.
//!
//! Multi-valued properties are semantically unordered, but diffing and
//! fixtures need one canonical order. Cells compare by kind rank first,
//! then by value within the kind:
//!
//! 1. unequal `kind_index()` ⇒ the smaller rank orders first
//! 2. both unset ⇒ equal
//! 3. both IRI ⇒ canonical IRI strings, lexically
//! 4. both literal ⇒ the literal's natural order
//! 5. both nested ⇒ the entity's own order, recursively

use std::cmp::Ordering;

use super::{Property, PropertyCell, PropertyValue};

impl<P: Property> PropertyCell<P> {
    pub fn compare(&self, other: &Self) -> Ordering {
        match self.kind_index().cmp(&other.kind_index()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        if let (Some(a), Some(b)) = (self.iri(), other.iri()) {
            return a.cmp(b);
        }
        if let (Some(a), Some(b)) = (self.value(), other.value()) {
            return a.compare(b);
        }
        Ordering::Equal
    }

    /// Strict weak ordering: never true for both `(a, b)` and `(b, a)`.
    pub fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Normalize the multi-valued properties of a held entity, recursively.
    pub fn normalize(&mut self) {
        if let Some(value) = self.value_mut() {
            value.normalize();
        }
    }
}

/// Normalize every cell, then sort them into canonical order. The sort is
/// stable, so equal cells keep their relative position.
pub fn normalize<P: Property>(cells: &mut [PropertyCell<P>]) {
    for cell in cells.iter_mut() {
        cell.normalize();
    }
    cells.sort_by(|a, b| a.compare(b));
}
