//! # Nested Entities
//!
//! Anything a property cell can hold besides literals and IRIs. The cell
//! depends on exactly the capabilities of [`Entity`]: serialize, order,
//! report its context, and read itself back.
//!
//! ## Ownership
//!
//! A cell owns the entity it holds (`Box<E>`), so every serialized value is
//! a tree. References that point back up the tree (a page's `partOf`) are
//! relations, not ownership: they are modelled as IRIs or `Link`s.
//!
//! ## Implementations
//!
//! | Entity | Module | Required |
//! |--------|--------|----------|
//! | `Link` | `link` | `href` |
//! | `CollectionPage` | `collection_page` | |
//! | `Place` | `place` | |

pub mod link;
pub mod collection_page;
pub mod place;

use std::cmp::Ordering;
use std::fmt;

use crate::model::tree::type_name;
use crate::model::{ContextMap, Iri, TreeMap, TreeValue};
use crate::property::{Property, PropertyCell, PropertyList};
use crate::vocab::{qualify, ACTIVITY_STREAMS};
use crate::{Error, Result};

pub use collection_page::CollectionPage;
pub use link::Link;
pub use place::Place;

/// The capability set a property cell needs from a nested value.
pub trait Entity: fmt::Debug + Clone + PartialEq + Sized {
    /// Vocabulary type term, e.g. `"Link"`.
    const TYPE_NAME: &'static str;

    /// Alias the ActivityStreams namespace is written under; empty when it
    /// is the default vocabulary.
    fn alias(&self) -> &str;

    /// Set the alias on the entity, its properties and every entity nested
    /// inside them.
    fn set_alias(&mut self, alias: &str);

    /// Convert into a tree. Fails when a required property is unset or a
    /// property value fails to serialize.
    fn serialize(&self) -> Result<TreeValue>;

    /// Total order over entities of this type.
    fn compare(&self, other: &Self) -> Ordering;

    fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Namespaces needed by the entity and every populated property.
    fn jsonld_context(&self) -> ContextMap;

    /// Read an entity back from a tree, resolving keys with `aliases`.
    fn deserialize(tree: &TreeValue, aliases: &ContextMap) -> Result<Self>;

    /// Put multi-valued properties into canonical order.
    fn normalize(&mut self) {}
}

// ============================================================================
// Helpers shared by the entity implementations
// ============================================================================

/// Start an entity object with its `type` and optional `id`.
pub(crate) fn begin_object(alias: &str, type_name: &str, id: Option<&Iri>) -> TreeMap {
    let mut object = TreeMap::new();
    object.insert("type".to_string(), TreeValue::String(qualify(alias, type_name)));
    if let Some(id) = id {
        object.insert("id".to_string(), TreeValue::String(id.as_str().to_owned()));
    }
    object
}

/// Check that `tree` is an object whose `type` names `type_name`.
///
/// The type may be given bare, alias-qualified or as a full IRI, alone or
/// inside an array of types.
pub(crate) fn expect_object<'a>(
    tree: &'a TreeValue,
    aliases: &ContextMap,
    type_name: &str,
) -> Result<&'a TreeMap> {
    let object = tree.as_object().ok_or_else(|| Error::TypeError {
        expected: format!("{type_name} object"),
        got: self::type_name(tree).to_string(),
    })?;

    let alias = aliases.alias_for(ACTIVITY_STREAMS).unwrap_or_default();
    let accepted = [
        type_name.to_string(),
        qualify(alias, type_name),
        format!("{ACTIVITY_STREAMS}#{type_name}"),
    ];
    let is_accepted = |t: &TreeValue| t.as_str().is_some_and(|s| accepted.iter().any(|a| a == s));

    let found = match object.get("type") {
        Some(TreeValue::Array(types)) => types.iter().any(is_accepted),
        Some(single) => is_accepted(single),
        None => false,
    };
    if !found {
        return Err(Error::TypeError {
            expected: type_name.to_string(),
            got: object
                .get("type")
                .map_or_else(|| "untyped object".to_string(), |t| t.to_string()),
        });
    }
    Ok(object)
}

pub(crate) fn read_id(object: &TreeMap) -> Result<Option<Iri>> {
    match object.get("id") {
        None => Ok(None),
        Some(TreeValue::String(s)) => Iri::parse(s).map(Some),
        Some(other) => Err(Error::TypeError {
            expected: "id string".to_string(),
            got: type_name(other).to_string(),
        }),
    }
}

/// Reads the modelled properties out of one entity object.
///
/// A value no variant of its property accepts does not fail the entity:
/// the key is left unconsumed and ends up in `unknown`, so it is written
/// back verbatim.
pub(crate) struct PropertyReader<'a> {
    object: &'a TreeMap,
    aliases: &'a ContextMap,
    consumed: Vec<String>,
}

impl<'a> PropertyReader<'a> {
    pub(crate) fn new(object: &'a TreeMap, aliases: &'a ContextMap) -> Self {
        Self {
            object,
            aliases,
            consumed: Vec::new(),
        }
    }

    fn key<P: Property>(&self) -> String {
        qualify(self.aliases.alias_for(P::NAMESPACE).unwrap_or_default(), P::NAME)
    }

    pub(crate) fn cell<P: Property>(&mut self) -> PropertyCell<P> {
        let key = self.key::<P>();
        match PropertyCell::<P>::deserialize_from(self.object, self.aliases) {
            Ok(Some(cell)) => {
                self.consumed.push(key);
                cell
            }
            Ok(None) => PropertyCell::new(),
            Err(error) => {
                tracing::debug!(key = %key, %error, "Keeping unreadable property as unknown");
                PropertyCell::new()
            }
        }
    }

    pub(crate) fn list<P: Property>(&mut self) -> PropertyList<P> {
        let key = self.key::<P>();
        match PropertyList::<P>::deserialize_from(self.object, self.aliases) {
            Ok(Some(list)) => {
                self.consumed.push(key);
                list
            }
            Ok(None) => PropertyList::new(),
            Err(error) => {
                tracing::debug!(key = %key, %error, "Keeping unreadable property as unknown");
                PropertyList::new()
            }
        }
    }

    /// Everything not consumed, recording extension namespaces.
    pub(crate) fn finish(self, extensions: &mut ContextMap) -> TreeMap {
        collect_unknown(self.object, &self.consumed, self.aliases, extensions)
    }
}

/// Keys of `object` not in `known`, preserved so they survive a round trip.
///
/// Prefixed keys whose prefix is a known alias also record their namespace
/// in `extensions`.
pub(crate) fn collect_unknown(
    object: &TreeMap,
    known: &[String],
    aliases: &ContextMap,
    extensions: &mut ContextMap,
) -> TreeMap {
    let mut unknown = TreeMap::new();
    for (key, value) in object {
        if key == "type" || key == "id" || key == "@context" || known.contains(key) {
            continue;
        }
        if let Some((prefix, _)) = key.split_once(':') {
            if let Some((namespace, _)) = aliases.iter().find(|(_, alias)| *alias == prefix) {
                extensions.insert(namespace, prefix);
            }
        }
        tracing::debug!(key = %key, "Preserving unrecognized property");
        unknown.insert(key.clone(), value.clone());
    }
    unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expect_object_accepts_type_forms() {
        let aliases = ContextMap::with_entry(ACTIVITY_STREAMS, "as");
        for tree in [
            json!({"type": "Link"}),
            json!({"type": "as:Link"}),
            json!({"type": ["Object", "https://www.w3.org/ns/activitystreams#Link"]}),
        ] {
            assert!(expect_object(&tree, &aliases, "Link").is_ok(), "{tree}");
        }
    }

    #[test]
    fn test_expect_object_rejects() {
        let aliases = ContextMap::new();
        assert!(expect_object(&json!("http://a"), &aliases, "Link").is_err());
        assert!(expect_object(&json!({"type": "Note"}), &aliases, "Link").is_err());
        assert!(expect_object(&json!({"href": "http://a"}), &aliases, "Link").is_err());
    }

    #[test]
    fn test_read_id() {
        let object = json!({"id": "http://example.org/1"});
        assert_eq!(
            read_id(object.as_object().unwrap()).unwrap().map(Iri::into_string),
            Some("http://example.org/1".to_string())
        );
        assert!(read_id(json!({"id": 1}).as_object().unwrap()).is_err());
    }

    #[test]
    fn test_reader_leaves_unreadable_values_unconsumed() {
        use crate::vocab::properties::{Last, Name, TotalItems};

        let aliases = ContextMap::with_entry(ACTIVITY_STREAMS, "");
        let tree = json!({
            "type": "CollectionPage",
            "name": "Page",
            "totalItems": -1,
            "last": {"type": "owl:Class"},
        });
        let object = tree.as_object().unwrap();
        let mut reader = PropertyReader::new(object, &aliases);

        assert!(reader.cell::<Name>().is_xml_schema_string());
        assert!(!reader.cell::<TotalItems>().has_any());
        assert!(!reader.cell::<Last>().has_any());

        let mut extensions = ContextMap::new();
        let unknown = reader.finish(&mut extensions);
        assert_eq!(unknown.len(), 2);
        assert_eq!(unknown.get("totalItems"), Some(&json!(-1)));
        assert_eq!(unknown.get("last"), Some(&json!({"type": "owl:Class"})));
    }

    #[test]
    fn test_collect_unknown_records_extension_namespace() {
        let aliases = ContextMap::from_iter([(ACTIVITY_STREAMS, ""), ("https://w3id.org/security/v1", "sec")]);
        let object = json!({"type": "Link", "href": "http://a", "sec:publicKey": "k", "misc": 1});
        let mut extensions = ContextMap::new();
        let unknown = collect_unknown(
            object.as_object().unwrap(),
            &["href".to_string()],
            &aliases,
            &mut extensions,
        );
        assert_eq!(unknown.len(), 2);
        assert_eq!(extensions.alias_for("https://w3id.org/security/v1"), Some("sec"));
    }
}
