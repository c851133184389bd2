//! # Vocabulary Value Model
//!
//! Pure data shared by every property cell: identifiers, namespace
//! contexts, the generic document tree and the literal codecs.
//!
//! Design rule: nothing here knows about a specific vocabulary term.
//! This module is pure data with no I/O.

pub mod iri;
pub mod context;
pub mod literal;
pub mod tree;

pub use iri::Iri;
pub use context::{AliasPolicy, ContextMap};
pub use literal::Literal;
pub use tree::{TreeMap, TreeValue};
