//! Link: an indirect, qualified reference to a resource.

use std::cmp::Ordering;

use super::{begin_object, expect_object, read_id, Entity, PropertyReader};
use crate::model::{ContextMap, Iri, TreeMap, TreeValue};
use crate::property::{Property, PropertyList};
use crate::vocab::properties::{
    Href, HrefProperty, HreflangProperty, MediaTypeProperty, NameProperty, Rel,
};
use crate::vocab::ACTIVITY_STREAMS;
use crate::{Error, Result};

/// A Link. `href` must be set before the link can be serialized.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Link {
    pub id: Option<Iri>,
    pub href: HrefProperty,
    pub media_type: MediaTypeProperty,
    pub name: NameProperty,
    pub hreflang: HreflangProperty,
    pub rel: PropertyList<Rel>,
    /// Namespaces used by keys in `unknown`.
    pub extensions: ContextMap,
    /// Properties read from a document that this type does not model.
    pub unknown: TreeMap,
    alias: String,
}

impl Link {
    pub fn new(href: Iri) -> Self {
        let mut link = Self::default();
        link.href.set_xml_schema_any_uri(href);
        link
    }
}

impl Entity for Link {
    const TYPE_NAME: &'static str = "Link";

    fn alias(&self) -> &str {
        &self.alias
    }

    fn set_alias(&mut self, alias: &str) {
        self.alias = alias.to_owned();
        self.href.set_alias(alias);
        self.media_type.set_alias(alias);
        self.name.set_alias(alias);
        self.hreflang.set_alias(alias);
        self.rel.set_alias(alias);
    }

    fn serialize(&self) -> Result<TreeValue> {
        if !self.href.has_any() {
            return Err(Error::MissingRequired {
                entity: Self::TYPE_NAME,
                property: Href::NAME,
            });
        }
        let mut object = begin_object(&self.alias, Self::TYPE_NAME, self.id.as_ref());
        self.href.serialize_into(&mut object)?;
        self.media_type.serialize_into(&mut object)?;
        self.name.serialize_into(&mut object)?;
        self.hreflang.serialize_into(&mut object)?;
        self.rel.serialize_into(&mut object)?;
        for (key, value) in &self.unknown {
            object.entry(key.clone()).or_insert_with(|| value.clone());
        }
        Ok(TreeValue::Object(object))
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.id
            .cmp(&other.id)
            .then_with(|| self.href.compare(&other.href))
            .then_with(|| self.media_type.compare(&other.media_type))
            .then_with(|| self.name.compare(&other.name))
            .then_with(|| self.hreflang.compare(&other.hreflang))
            .then_with(|| self.rel.compare(&other.rel))
    }

    fn jsonld_context(&self) -> ContextMap {
        let mut context = ContextMap::with_entry(ACTIVITY_STREAMS, self.alias.as_str());
        context.union(self.href.jsonld_context());
        context.union(self.media_type.jsonld_context());
        context.union(self.name.jsonld_context());
        context.union(self.hreflang.jsonld_context());
        context.union(self.rel.jsonld_context());
        context.union(self.extensions.clone());
        context
    }

    /// Fails with [`Error::MissingRequired`] when `href` is absent or
    /// unreadable, matching what [`Link::serialize`] accepts.
    fn deserialize(tree: &TreeValue, aliases: &ContextMap) -> Result<Self> {
        let object = expect_object(tree, aliases, Self::TYPE_NAME)?;
        let mut reader = PropertyReader::new(object, aliases);

        let mut link = Link {
            id: read_id(object)?,
            href: reader.cell(),
            media_type: reader.cell(),
            name: reader.cell(),
            hreflang: reader.cell(),
            rel: reader.list(),
            ..Default::default()
        };
        if !link.href.has_any() {
            return Err(Error::MissingRequired {
                entity: Self::TYPE_NAME,
                property: Href::NAME,
            });
        }
        link.unknown = reader.finish(&mut link.extensions);
        link.set_alias(aliases.alias_for(ACTIVITY_STREAMS).unwrap_or_default());
        Ok(link)
    }

    fn normalize(&mut self) {
        self.rel.normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::properties::RelValue;
    use serde_json::json;

    fn iri(s: &str) -> Iri {
        Iri::parse(s).unwrap()
    }

    #[test]
    fn test_serialize_requires_href() {
        let err = Link::default().serialize().unwrap_err();
        assert!(matches!(err, Error::MissingRequired { entity: "Link", property: "href" }));
    }

    #[test]
    fn test_serialize_shape() {
        let mut link = Link::new(iri("http://example.org/abc"));
        link.media_type.set_rfc_rfc2045("text/html".into());
        link.name.set_xml_schema_string("An example link".into());
        link.hreflang.set_rfc_bcp47("en".into());

        assert_eq!(
            link.serialize().unwrap(),
            json!({
                "type": "Link",
                "href": "http://example.org/abc",
                "mediaType": "text/html",
                "name": "An example link",
                "hreflang": "en",
            })
        );
    }

    #[test]
    fn test_alias_qualifies_keys_and_type() {
        let mut link = Link::new(iri("http://a"));
        link.set_alias("as");
        let tree = link.serialize().unwrap();
        assert_eq!(tree, json!({"type": "as:Link", "as:href": "http://a"}));
        assert_eq!(link.jsonld_context().alias_for(ACTIVITY_STREAMS), Some("as"));
    }

    #[test]
    fn test_deserialize_roundtrip_keeps_unknown() {
        let aliases = ContextMap::with_entry(ACTIVITY_STREAMS, "");
        let tree = json!({
            "type": "Link",
            "id": "http://example.org/links/1",
            "href": "http://example.org/abc",
            "rel": ["canonical", "preview"],
            "width": 640,
        });
        let link = Link::deserialize(&tree, &aliases).unwrap();
        assert_eq!(link.href.get_xml_schema_any_uri().map(Iri::as_str), Some("http://example.org/abc"));
        assert_eq!(link.rel.len(), 2);
        assert_eq!(link.unknown.get("width"), Some(&json!(640)));
        assert_eq!(link.serialize().unwrap(), tree);
    }

    #[test]
    fn test_deserialize_requires_href() {
        let aliases = ContextMap::with_entry(ACTIVITY_STREAMS, "");
        for tree in [json!({"type": "Link"}), json!({"type": "Link", "href": 5})] {
            let err = Link::deserialize(&tree, &aliases).unwrap_err();
            assert!(matches!(err, Error::MissingRequired { entity: "Link", property: "href" }), "{tree}");
        }
    }

    #[test]
    fn test_compare_by_href() {
        let a = Link::new(iri("http://a"));
        let b = Link::new(iri("http://b"));
        assert!(a.less_than(&b));
        assert!(!b.less_than(&a));
        assert!(!a.less_than(&a.clone()));
    }

    #[test]
    fn test_normalize_sorts_rel() {
        let mut link = Link::new(iri("http://a"));
        link.rel.push(RelValue::RfcRfc5988("preview".into()));
        link.rel.push(RelValue::RfcRfc5988("canonical".into()));
        link.normalize();
        assert_eq!(link.serialize().unwrap()["rel"], json!(["canonical", "preview"]));
    }
}
