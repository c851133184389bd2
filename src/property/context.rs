//! Namespace context contributed by a single cell.
//!
//! Only the populated variant contributes. Folding the maps of sibling
//! cells into one document `@context` is the owner's job; see
//! [`crate::model::ContextMap::merge`] for the collision policies.

use super::{Property, PropertyCell, PropertyValue};
use crate::model::ContextMap;

impl<P: Property> PropertyCell<P> {
    /// Namespaces needed to interpret the populated value.
    ///
    /// Empty for an unset cell. Otherwise the property's own namespace
    /// under the cell's alias, plus the nested entity's context when one is
    /// held. The cell's own entry wins if the entity asks for a different
    /// alias of the same namespace.
    pub fn jsonld_context(&self) -> ContextMap {
        if !self.has_any() {
            return ContextMap::new();
        }
        let mut context = ContextMap::with_entry(P::NAMESPACE, self.alias());
        if let Some(value) = self.value() {
            context.union(value.jsonld_context());
        }
        context
    }
}

#[cfg(test)]
mod tests {
    use crate::entity::{CollectionPage, Entity, Link};
    use crate::model::Iri;
    use crate::vocab::properties::{LastProperty, UnitsProperty};
    use crate::vocab::{ACTIVITY_STREAMS, SECURITY_V1};

    fn iri(s: &str) -> Iri {
        Iri::parse(s).unwrap()
    }

    #[test]
    fn test_unset_is_empty() {
        assert!(UnitsProperty::new().jsonld_context().is_empty());
        assert!(UnitsProperty::with_alias("as").jsonld_context().is_empty());
    }

    #[test]
    fn test_literal_and_iri_contribute_own_namespace() {
        let mut cell = UnitsProperty::with_alias("as");
        cell.set_xml_schema_string("miles".into());
        let ctx = cell.jsonld_context();
        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx.alias_for(ACTIVITY_STREAMS), Some("as"));

        cell.set_iri(iri("http://example.org/u"));
        assert_eq!(cell.jsonld_context().alias_for(ACTIVITY_STREAMS), Some("as"));
    }

    #[test]
    fn test_nested_entity_context_is_merged() {
        let mut link = Link::new(iri("http://example.org/p/1"));
        link.extensions.insert(SECURITY_V1, "sec");
        let mut cell = LastProperty::new();
        cell.set_link(link);

        let ctx = cell.jsonld_context();
        assert_eq!(ctx.alias_for(ACTIVITY_STREAMS), Some(""));
        assert_eq!(ctx.alias_for(SECURITY_V1), Some("sec"));
    }

    #[test]
    fn test_nested_entity_takes_cell_alias() {
        let mut page = CollectionPage::default();
        page.set_alias("as");
        let mut cell = LastProperty::new();
        cell.set_collection_page(page);
        assert_eq!(cell.get_collection_page().map(|p| p.alias()), Some(""));
        assert_eq!(cell.jsonld_context().alias_for(ACTIVITY_STREAMS), Some(""));
    }
}
