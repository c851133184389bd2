//! Cell ↔ document tree conversion.
//!
//! Serialization is the only fallible cell operation. Failures below a
//! value are wrapped in [`Error::Serialize`] carrying the property name;
//! nothing partial is ever returned.

use super::{Property, PropertyCell, PropertyValue};
use crate::model::tree::type_name;
use crate::model::{ContextMap, Iri, TreeMap, TreeValue};
use crate::vocab::qualify;
use crate::{Error, Result};

impl<P: Property> PropertyCell<P> {
    /// Convert the populated variant into a tree.
    ///
    /// Fails with [`Error::Unset`] on an empty cell; callers writing
    /// optional properties should check `has_any()` or use
    /// [`Self::serialize_into`].
    pub fn serialize(&self) -> Result<TreeValue> {
        if let Some(iri) = self.iri() {
            return Ok(TreeValue::String(iri.as_str().to_owned()));
        }
        match self.value() {
            Some(value) => value.serialize().map_err(|source| Error::Serialize {
                property: P::NAME,
                source: Box::new(source),
            }),
            None => Err(Error::Unset { property: P::NAME }),
        }
    }

    /// Write this cell into `object` under its qualified name. Unset cells
    /// write nothing.
    pub fn serialize_into(&self, object: &mut TreeMap) -> Result<()> {
        if self.has_any() {
            object.insert(self.qualified_name(), self.serialize()?);
        }
        Ok(())
    }

    /// Rebuild a cell from a tree produced by [`Self::serialize`].
    ///
    /// Declared kinds are tried in rank order; a string holding an absolute
    /// IRI falls back to the IRI variant when no kind accepts it. The
    /// cell's alias is taken from `aliases` for the property's namespace.
    pub fn from_tree(tree: &TreeValue, aliases: &ContextMap) -> Result<Self> {
        let mut cell = Self::with_alias(aliases.alias_for(P::NAMESPACE).unwrap_or_default());

        let rejection = match P::Value::deserialize(tree, aliases) {
            Ok(value) => {
                cell.set(value);
                return Ok(cell);
            }
            Err(rejection) => rejection,
        };
        if let Some(iri) = tree.as_str().and_then(|s| Iri::parse(s).ok()) {
            tracing::debug!(property = P::NAME, iri = %iri, "Falling back to IRI variant");
            cell.set_iri(iri);
            return Ok(cell);
        }
        Err(Error::NoMatchingVariant {
            property: P::NAME,
            found: type_name(tree),
            source: Box::new(rejection),
        })
    }

    /// Read this property out of a serialized entity.
    ///
    /// Returns `Ok(None)` when the object has no entry under the
    /// alias-qualified key.
    pub fn deserialize_from(object: &TreeMap, aliases: &ContextMap) -> Result<Option<Self>> {
        let alias = aliases.alias_for(P::NAMESPACE).unwrap_or_default();
        match object.get(&qualify(alias, P::NAME)) {
            Some(tree) => Self::from_tree(tree, aliases).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Link;
    use crate::vocab::properties::{LastProperty, RadiusProperty, TotalItemsProperty, UnitsProperty};
    use crate::vocab::ACTIVITY_STREAMS;
    use serde_json::json;

    fn iri(s: &str) -> Iri {
        Iri::parse(s).unwrap()
    }

    fn as_default() -> ContextMap {
        ContextMap::with_entry(ACTIVITY_STREAMS, "")
    }

    #[test]
    fn test_unset_fails_loudly() {
        let err = UnitsProperty::new().serialize().unwrap_err();
        assert!(matches!(err, Error::Unset { property: "units" }));
    }

    #[test]
    fn test_iri_and_literals() {
        assert_eq!(
            UnitsProperty::from_iri(iri("http://example.org/abc")).serialize().unwrap(),
            json!("http://example.org/abc")
        );

        let mut radius = RadiusProperty::new();
        radius.set_xml_schema_float(15.0);
        assert_eq!(radius.serialize().unwrap(), json!(15));

        let mut total = TotalItemsProperty::new();
        total.set_xml_schema_non_negative_integer(3);
        assert_eq!(total.serialize().unwrap(), json!(3));
    }

    #[test]
    fn test_literal_failure_is_tagged() {
        let mut radius = RadiusProperty::new();
        radius.set_xml_schema_float(f64::NAN);
        let err = radius.serialize().unwrap_err();
        assert!(matches!(err, Error::Serialize { property: "radius", .. }));
    }

    #[test]
    fn test_nested_failure_is_tagged() {
        let mut cell = LastProperty::new();
        cell.set_link(Link::default());
        let err = cell.serialize().unwrap_err();
        match err {
            Error::Serialize { property, source } => {
                assert_eq!(property, "last");
                assert!(matches!(*source, Error::MissingRequired { entity: "Link", property: "href" }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_serialize_into_skips_unset() {
        let mut object = TreeMap::new();
        UnitsProperty::new().serialize_into(&mut object).unwrap();
        assert!(object.is_empty());

        let mut units = UnitsProperty::with_alias("as");
        units.set_xml_schema_string("miles".into());
        units.serialize_into(&mut object).unwrap();
        assert_eq!(object.get("as:units"), Some(&json!("miles")));
    }

    #[test]
    fn test_from_tree_prefers_declared_kinds() {
        let aliases = as_default();

        let cell = UnitsProperty::from_tree(&json!("http://example.org/m"), &aliases).unwrap();
        assert!(cell.is_xml_schema_any_uri());

        let cell = UnitsProperty::from_tree(&json!("miles"), &aliases).unwrap();
        assert!(cell.is_xml_schema_string());

        assert!(matches!(
            UnitsProperty::from_tree(&json!(3), &aliases),
            Err(Error::NoMatchingVariant { property: "units", found: "number", .. })
        ));
    }

    #[test]
    fn test_from_tree_falls_back_to_iri() {
        let cell = LastProperty::from_tree(&json!("http://example.org/collection?page=1"), &as_default()).unwrap();
        assert!(cell.is_iri());
        assert_eq!(cell.iri().map(Iri::as_str), Some("http://example.org/collection?page=1"));

        assert!(LastProperty::from_tree(&json!("page one"), &as_default()).is_err());
    }

    #[test]
    fn test_rejection_keeps_nested_cause() {
        let err = LastProperty::from_tree(&json!({"type": "Link"}), &as_default()).unwrap_err();
        match err {
            Error::NoMatchingVariant { property, found, source } => {
                assert_eq!((property, found), ("last", "object"));
                assert!(matches!(*source, Error::MissingRequired { entity: "Link", property: "href" }));
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = LastProperty::from_tree(
            &json!({"type": "CollectionPage", "id": "not an iri"}),
            &as_default(),
        )
        .unwrap_err();
        match err {
            Error::NoMatchingVariant { source, .. } => assert!(matches!(*source, Error::InvalidIri(_))),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_deserialize_from_uses_alias() {
        let aliases = ContextMap::with_entry(ACTIVITY_STREAMS, "as");
        let object = json!({"as:units": "miles", "units": "feet"});
        let object = object.as_object().unwrap();

        let cell = UnitsProperty::deserialize_from(object, &aliases).unwrap().unwrap();
        assert_eq!(cell.get_xml_schema_string().map(String::as_str), Some("miles"));
        assert_eq!(cell.alias(), "as");

        assert!(RadiusProperty::deserialize_from(object, &aliases).unwrap().is_none());
    }
}
