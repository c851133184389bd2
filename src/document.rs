//! # Documents
//!
//! Top-level entities with their `@context`.
//!
//! An entity tree only knows the aliases its keys were written under. A
//! document adds the `@context` that binds those aliases to namespaces, so
//! a consumer can read it back without out-of-band knowledge:
//!
//! ```text
//! to_document:   entity ──serialize──▶ object ──+ @context──▶ document
//! from_document: document ──@context──▶ aliases ──deserialize──▶ entity
//! ```
//!
//! `@context` is written in the compact form ActivityStreams documents use:
//! namespaces imported without an alias are plain URI strings, aliased
//! ones share a single `{alias: uri}` object, and a lone URI is not wrapped
//! in an array.

use crate::config::VocabConfig;
use crate::entity::Entity;
use crate::model::tree::type_name;
use crate::model::{ContextMap, TreeMap, TreeValue};
use crate::vocab::ACTIVITY_STREAMS;
use crate::{Error, Result};

const CONTEXT_KEY: &str = "@context";

/// Serialize `entity` as a standalone document.
///
/// The entity's context is merged into `config.context` under
/// `config.alias_policy`. A copy of the entity, nested entities included,
/// is then re-aliased to the ActivityStreams alias the merge settled on, so
/// every key agrees with the emitted `@context`.
pub fn to_document<E: Entity>(entity: &E, config: &VocabConfig) -> Result<TreeValue> {
    let mut context = config.context.clone();
    context.merge(&entity.jsonld_context(), config.alias_policy)?;
    let alias = context.alias_for(ACTIVITY_STREAMS).unwrap_or_default();

    let mut owned = entity.clone();
    if config.normalize {
        owned.normalize();
    }
    owned.set_alias(alias);
    let tree = owned.serialize()?;

    let mut object = match tree {
        TreeValue::Object(object) => object,
        other => {
            return Err(Error::TypeError {
                expected: format!("{} object", E::TYPE_NAME),
                got: type_name(&other).to_string(),
            })
        }
    };
    object.insert(CONTEXT_KEY.to_string(), context_to_tree(&context));
    Ok(TreeValue::Object(object))
}

/// Read an entity back from a document.
///
/// Aliases declared in the document's `@context` take precedence; the
/// configured context fills in namespaces the document leaves out.
pub fn from_document<E: Entity>(tree: &TreeValue, config: &VocabConfig) -> Result<E> {
    let mut aliases = match tree.get(CONTEXT_KEY) {
        Some(context) => context_from_tree(context)?,
        None => ContextMap::new(),
    };
    aliases.union(config.context.clone());
    E::deserialize(tree, &aliases)
}

/// Render a context map in compact `@context` form.
pub fn context_to_tree(context: &ContextMap) -> TreeValue {
    let mut entries: Vec<TreeValue> = Vec::new();
    let mut aliased = TreeMap::new();
    for (namespace, alias) in context.sorted() {
        if alias.is_empty() {
            entries.push(TreeValue::String(namespace.to_owned()));
        } else {
            aliased.insert(alias.to_owned(), TreeValue::String(namespace.to_owned()));
        }
    }
    if !aliased.is_empty() {
        entries.push(TreeValue::Object(aliased));
    }
    match entries.len() {
        1 if entries[0].is_string() => entries.swap_remove(0),
        _ => TreeValue::Array(entries),
    }
}

/// Parse a `@context` value (string, object, or array of those) into a
/// namespace → alias map.
///
/// Term definitions that are not plain namespace strings (expanded term
/// objects, keyword aliases, nested `@`-directives) are ignored. A
/// trailing `#` on a namespace is dropped so `…/activitystreams#` and
/// `…/activitystreams` resolve the same.
pub fn context_from_tree(tree: &TreeValue) -> Result<ContextMap> {
    let mut context = ContextMap::new();
    read_context(tree, &mut context)?;
    Ok(context)
}

fn read_context(tree: &TreeValue, context: &mut ContextMap) -> Result<()> {
    match tree {
        TreeValue::String(namespace) => {
            context.insert(canonical_namespace(namespace), "");
        }
        TreeValue::Array(items) => {
            for item in items {
                read_context(item, context)?;
            }
        }
        TreeValue::Object(terms) => {
            for (term, definition) in terms {
                match definition.as_str() {
                    Some(namespace) if !term.starts_with('@') && !namespace.starts_with('@') => {
                        context.insert(canonical_namespace(namespace), term.as_str());
                    }
                    _ => {
                        tracing::debug!(term = %term, definition = type_name(definition), "Ignoring context entry");
                    }
                }
            }
        }
        TreeValue::Null => {}
        other => {
            return Err(Error::TypeError {
                expected: "@context string, object or array".to_string(),
                got: type_name(other).to_string(),
            })
        }
    }
    Ok(())
}

fn canonical_namespace(namespace: &str) -> &str {
    namespace.strip_suffix('#').unwrap_or(namespace)
}
