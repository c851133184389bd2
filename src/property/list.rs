//! PropertyList: ordered values of a multi-valued property.
//!
//! Most multi-valued properties carry a single element in practice, so the
//! cells live inline in a `SmallVec` until a second one is pushed.

use std::cmp::Ordering;

use smallvec::SmallVec;

use super::{normalize, Property, PropertyCell};
use crate::model::tree::type_name;
use crate::model::{ContextMap, Iri, TreeMap, TreeValue};
use crate::vocab::qualify;
use crate::{Error, Result};

/// A sequence of [`PropertyCell`]s of one property.
///
/// Every element shares the list's alias.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyList<P: Property> {
    cells: SmallVec<[PropertyCell<P>; 1]>,
    alias: String,
}

impl<P: Property> Default for PropertyList<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Property> PropertyList<P> {
    pub fn new() -> Self {
        Self {
            cells: SmallVec::new(),
            alias: String::new(),
        }
    }

    pub fn with_alias(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            ..Self::new()
        }
    }

    pub fn name(&self) -> &'static str {
        P::NAME
    }

    pub fn qualified_name(&self) -> String {
        qualify(&self.alias, P::NAME)
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Change the alias of the list and of every element.
    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = alias.into();
        for cell in &mut self.cells {
            cell.set_alias(self.alias.clone());
        }
    }

    // ========================================================================
    // Access
    // ========================================================================

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn at(&self, index: usize) -> Option<&PropertyCell<P>> {
        self.cells.get(index)
    }

    pub fn at_mut(&mut self, index: usize) -> Option<&mut PropertyCell<P>> {
        self.cells.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyCell<P>> {
        self.cells.iter()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    fn cell(&self) -> PropertyCell<P> {
        PropertyCell::with_alias(self.alias.clone())
    }

    pub fn push(&mut self, value: P::Value) {
        let mut cell = self.cell();
        cell.set(value);
        self.cells.push(cell);
    }

    pub fn push_iri(&mut self, iri: Iri) {
        let mut cell = self.cell();
        cell.set_iri(iri);
        self.cells.push(cell);
    }

    pub fn prepend(&mut self, value: P::Value) {
        let mut cell = self.cell();
        cell.set(value);
        self.cells.insert(0, cell);
    }

    pub fn prepend_iri(&mut self, iri: Iri) {
        let mut cell = self.cell();
        cell.set_iri(iri);
        self.cells.insert(0, cell);
    }

    /// Insert a value before `index`; appends when `index >= len()`.
    pub fn insert(&mut self, index: usize, value: P::Value) {
        let mut cell = self.cell();
        cell.set(value);
        let index = index.min(self.cells.len());
        self.cells.insert(index, cell);
    }

    pub fn remove(&mut self, index: usize) -> Option<PropertyCell<P>> {
        (index < self.cells.len()).then(|| self.cells.remove(index))
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Sort the elements into canonical cell order.
    pub fn normalize(&mut self) {
        normalize(&mut self.cells);
    }

    // ========================================================================
    // Order, context, serialization
    // ========================================================================

    /// Lexicographic over elements; a strict prefix orders first.
    pub fn compare(&self, other: &Self) -> Ordering {
        for (a, b) in self.cells.iter().zip(other.cells.iter()) {
            match a.compare(b) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        self.len().cmp(&other.len())
    }

    pub fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    pub fn jsonld_context(&self) -> ContextMap {
        let mut context = ContextMap::new();
        for cell in &self.cells {
            context.union(cell.jsonld_context());
        }
        context
    }

    /// One element serializes as itself, several as an array.
    pub fn serialize(&self) -> Result<TreeValue> {
        match self.cells.as_slice() {
            [] => Err(Error::Unset { property: P::NAME }),
            [single] => single.serialize(),
            many => many
                .iter()
                .map(PropertyCell::serialize)
                .collect::<Result<Vec<_>>>()
                .map(TreeValue::Array),
        }
    }

    pub fn serialize_into(&self, object: &mut TreeMap) -> Result<()> {
        if !self.is_empty() {
            object.insert(self.qualified_name(), self.serialize()?);
        }
        Ok(())
    }

    /// Accepts a single value or an array of values.
    pub fn from_tree(tree: &TreeValue, aliases: &ContextMap) -> Result<Self> {
        let mut list = Self::with_alias(aliases.alias_for(P::NAMESPACE).unwrap_or_default());
        match tree {
            TreeValue::Array(items) => {
                for item in items {
                    if item.is_array() {
                        return Err(Error::TypeError {
                            expected: format!("{} element", P::NAME),
                            got: type_name(item).to_string(),
                        });
                    }
                    list.cells.push(PropertyCell::from_tree(item, aliases)?);
                }
            }
            single => list.cells.push(PropertyCell::from_tree(single, aliases)?),
        }
        Ok(list)
    }

    pub fn deserialize_from(object: &TreeMap, aliases: &ContextMap) -> Result<Option<Self>> {
        let alias = aliases.alias_for(P::NAMESPACE).unwrap_or_default();
        match object.get(&qualify(alias, P::NAME)) {
            Some(tree) => Self::from_tree(tree, aliases).map(Some),
            None => Ok(None),
        }
    }
}

impl<'a, P: Property> IntoIterator for &'a PropertyList<P> {
    type Item = &'a PropertyCell<P>;
    type IntoIter = std::slice::Iter<'a, PropertyCell<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::properties::{Rel, RelValue};
    use serde_json::json;

    fn rel(s: &str) -> RelValue {
        RelValue::RfcRfc5988(s.to_string())
    }

    fn iri(s: &str) -> Iri {
        Iri::parse(s).unwrap()
    }

    #[test]
    fn test_push_prepend_insert_remove() {
        let mut list = PropertyList::<Rel>::new();
        list.push(rel("b"));
        list.prepend(rel("a"));
        list.insert(99, rel("d"));
        list.insert(2, rel("c"));
        let values: Vec<_> = list.iter().filter_map(|c| c.get_rfc_rfc5988().cloned()).collect();
        assert_eq!(values, vec!["a", "b", "c", "d"]);

        assert!(list.remove(10).is_none());
        assert_eq!(list.remove(0).and_then(|c| c.get_rfc_rfc5988().cloned()), Some("a".into()));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_normalize_orders_iri_first() {
        let mut list = PropertyList::<Rel>::new();
        list.push(rel("next"));
        list.push_iri(iri("http://example.org/rel"));
        list.push(rel("canonical"));
        list.normalize();

        assert!(list.at(0).is_some_and(|c| c.is_iri()));
        assert_eq!(list.at(1).and_then(|c| c.get_rfc_rfc5988()).map(String::as_str), Some("canonical"));
    }

    #[test]
    fn test_compare_is_lexicographic() {
        let mut short = PropertyList::<Rel>::new();
        short.push(rel("a"));
        let mut long = short.clone();
        long.push(rel("a"));
        assert!(short.less_than(&long));
        assert!(!long.less_than(&short));
        assert!(!short.less_than(&short.clone()));
    }

    #[test]
    fn test_serialize_shapes() {
        let mut list = PropertyList::<Rel>::new();
        assert!(matches!(list.serialize(), Err(Error::Unset { property: "rel" })));

        list.push(rel("canonical"));
        assert_eq!(list.serialize().unwrap(), json!("canonical"));

        list.push_iri(iri("http://example.org/rel"));
        assert_eq!(list.serialize().unwrap(), json!(["canonical", "http://example.org/rel"]));
    }

    #[test]
    fn test_from_tree_accepts_scalar_and_array() {
        let aliases = ContextMap::new();
        assert_eq!(PropertyList::<Rel>::from_tree(&json!("a"), &aliases).unwrap().len(), 1);
        assert_eq!(PropertyList::<Rel>::from_tree(&json!(["a", "b"]), &aliases).unwrap().len(), 2);
        assert!(PropertyList::<Rel>::from_tree(&json!([["a"]]), &aliases).is_err());
    }
}
