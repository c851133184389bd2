//! CollectionPage: one page of a paged collection.
//!
//! Pages hold their neighbours (`first`, `last`, `current`, `next`, `prev`)
//! by value when inlined, or by IRI/Link otherwise. `part_of` points back
//! at the containing collection and is never an owning reference, so a page
//! tree cannot contain a cycle.

use std::cmp::Ordering;

use super::{begin_object, expect_object, read_id, Entity, PropertyReader};
use crate::model::{ContextMap, Iri, TreeMap, TreeValue};
use crate::property::PropertyList;
use crate::vocab::properties::{
    CurrentProperty, FirstProperty, Items, LastProperty, NameProperty, NextProperty,
    PartOfProperty, PrevProperty, PublishedProperty, TotalItemsProperty,
};
use crate::vocab::ACTIVITY_STREAMS;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollectionPage {
    pub id: Option<Iri>,
    pub name: NameProperty,
    pub total_items: TotalItemsProperty,
    pub items: PropertyList<Items>,
    pub first: FirstProperty,
    pub last: LastProperty,
    pub current: CurrentProperty,
    pub next: NextProperty,
    pub prev: PrevProperty,
    pub part_of: PartOfProperty,
    pub published: PublishedProperty,
    /// Namespaces used by keys in `unknown`.
    pub extensions: ContextMap,
    /// Properties read from a document that this type does not model.
    pub unknown: TreeMap,
    alias: String,
}

impl CollectionPage {
    pub fn new(id: Iri) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}

impl Entity for CollectionPage {
    const TYPE_NAME: &'static str = "CollectionPage";

    fn alias(&self) -> &str {
        &self.alias
    }

    fn set_alias(&mut self, alias: &str) {
        self.alias = alias.to_owned();
        self.name.set_alias(alias);
        self.total_items.set_alias(alias);
        self.items.set_alias(alias);
        self.first.set_alias(alias);
        self.last.set_alias(alias);
        self.current.set_alias(alias);
        self.next.set_alias(alias);
        self.prev.set_alias(alias);
        self.part_of.set_alias(alias);
        self.published.set_alias(alias);
    }

    fn serialize(&self) -> Result<TreeValue> {
        let mut object = begin_object(&self.alias, Self::TYPE_NAME, self.id.as_ref());
        self.name.serialize_into(&mut object)?;
        self.total_items.serialize_into(&mut object)?;
        self.items.serialize_into(&mut object)?;
        self.first.serialize_into(&mut object)?;
        self.last.serialize_into(&mut object)?;
        self.current.serialize_into(&mut object)?;
        self.next.serialize_into(&mut object)?;
        self.prev.serialize_into(&mut object)?;
        self.part_of.serialize_into(&mut object)?;
        self.published.serialize_into(&mut object)?;
        for (key, value) in &self.unknown {
            object.entry(key.clone()).or_insert_with(|| value.clone());
        }
        Ok(TreeValue::Object(object))
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.id
            .cmp(&other.id)
            .then_with(|| self.name.compare(&other.name))
            .then_with(|| self.total_items.compare(&other.total_items))
            .then_with(|| self.items.compare(&other.items))
            .then_with(|| self.first.compare(&other.first))
            .then_with(|| self.last.compare(&other.last))
            .then_with(|| self.current.compare(&other.current))
            .then_with(|| self.next.compare(&other.next))
            .then_with(|| self.prev.compare(&other.prev))
            .then_with(|| self.part_of.compare(&other.part_of))
            .then_with(|| self.published.compare(&other.published))
    }

    fn jsonld_context(&self) -> ContextMap {
        let mut context = ContextMap::with_entry(ACTIVITY_STREAMS, self.alias.as_str());
        context.union(self.name.jsonld_context());
        context.union(self.total_items.jsonld_context());
        context.union(self.items.jsonld_context());
        context.union(self.first.jsonld_context());
        context.union(self.last.jsonld_context());
        context.union(self.current.jsonld_context());
        context.union(self.next.jsonld_context());
        context.union(self.prev.jsonld_context());
        context.union(self.part_of.jsonld_context());
        context.union(self.published.jsonld_context());
        context.union(self.extensions.clone());
        context
    }

    fn deserialize(tree: &TreeValue, aliases: &ContextMap) -> Result<Self> {
        let object = expect_object(tree, aliases, Self::TYPE_NAME)?;
        let mut reader = PropertyReader::new(object, aliases);

        let mut page = CollectionPage {
            id: read_id(object)?,
            name: reader.cell(),
            total_items: reader.cell(),
            items: reader.list(),
            first: reader.cell(),
            last: reader.cell(),
            current: reader.cell(),
            next: reader.cell(),
            prev: reader.cell(),
            part_of: reader.cell(),
            published: reader.cell(),
            ..Default::default()
        };
        page.unknown = reader.finish(&mut page.extensions);
        page.set_alias(aliases.alias_for(ACTIVITY_STREAMS).unwrap_or_default());
        Ok(page)
    }

    fn normalize(&mut self) {
        self.items.normalize();
        self.first.normalize();
        self.last.normalize();
        self.current.normalize();
        self.next.normalize();
        self.prev.normalize();
        self.part_of.normalize();
    }
}
