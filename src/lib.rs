//! # astreams - ActivityStreams Property Cells
//!
//! Every property of the ActivityStreams vocabulary is a small closed-world
//! tagged union: it holds nothing, an IRI, a literal, or a nested entity.
//! This crate implements that union once, generically, and stamps it out
//! per vocabulary term from a declarative table.
//!
//! ## Design Principles
//!
//! 1. **One cell, many properties**: `PropertyCell<P>` is generic over a
//!    `Property` marker; the per-term code is a table row, not a type.
//! 2. **Stable order**: every cell has a kind rank and a total order, so
//!    multi-valued properties normalize deterministically.
//! 3. **Loud serialization**: an unset cell or a broken nested entity is an
//!    error tagged with the property name, never a silent `null`.
//! 4. **Trees, not graphs**: nested entities are owned by the cell holding
//!    them; links back to a container are IRIs or `Link`s.
//!
//! ## Quick Start
//!
//! ```rust
//! use astreams::{Iri, UnitsProperty};
//!
//! # fn example() -> astreams::Result<()> {
//! let mut units = UnitsProperty::new();
//! units.set_iri(Iri::parse("http://example.org/abc")?);
//! units.set_xml_schema_string("miles".to_string());
//!
//! assert!(!units.is_iri());
//! assert_eq!(units.get_xml_schema_string().map(String::as_str), Some("miles"));
//! assert_eq!(units.serialize()?, serde_json::json!("miles"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Layers
//!
//! | Layer | Module | Description |
//! |-------|--------|-------------|
//! | Kind registry | `property::kind` | Stable rank per variant |
//! | Property cell | `property::cell` | Mutually exclusive storage |
//! | Ordering | `property::order` | Strict weak order over cells |
//! | Context | `property::context` | Namespace contribution |
//! | Serializer | `property::serialize` | Cell ↔ document tree |
//! | Entities | `entity` | `Link`, `CollectionPage`, `Place` |
//! | Documents | `document` | `@context` assembly and parsing |

#[macro_use]
mod macros;

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod property;
pub mod vocab;
pub mod entity;
pub mod document;
pub mod config;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{AliasPolicy, ContextMap, Iri, Literal, TreeMap, TreeValue};

// ============================================================================
// Re-exports: Properties
// ============================================================================

pub use property::{Kind, Property, PropertyCell, PropertyList, PropertyValue};
pub use vocab::properties::*;

// ============================================================================
// Re-exports: Entities & documents
// ============================================================================

pub use entity::{CollectionPage, Entity, Link, Place};
pub use document::{from_document, to_document};
pub use config::VocabConfig;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Property '{property}' failed to serialize: {source}")]
    Serialize {
        property: &'static str,
        #[source]
        source: Box<Error>,
    },

    #[error("Property '{property}' has no value set")]
    Unset { property: &'static str },

    #[error("{entity} is missing required property '{property}'")]
    MissingRequired {
        entity: &'static str,
        property: &'static str,
    },

    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    #[error("Value not representable: {0}")]
    Unrepresentable(String),

    #[error("Property '{property}' has no variant accepting a {found} value: {source}")]
    NoMatchingVariant {
        property: &'static str,
        found: &'static str,
        #[source]
        source: Box<Error>,
    },

    #[error("Type error: expected {expected}, got {got}")]
    TypeError { expected: String, got: String },

    #[error("Alias conflict for namespace {namespace}: '{existing}' vs '{requested}'")]
    AliasConflict {
        namespace: String,
        existing: String,
        requested: String,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
