//! Variant kind registry.
//!
//! Every property has the same two leading kinds, `Unset` and `Iri`,
//! followed by its declared value kinds. Ranks are fixed by declaration
//! order and never depend on runtime state:
//!
//! | Kind | Index |
//! |------|-------|
//! | `Unset` | 0 |
//! | `Iri` | 1 |
//! | `Value(i)` | 2 + i |

use super::{Property, PropertyValue};

/// Which variant of a property cell is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Unset,
    Iri,
    /// Declared value kind, by position in `PropertyValue::KINDS`.
    Value(usize),
}

pub const UNSET_INDEX: usize = 0;
pub const IRI_INDEX: usize = 1;
const FIRST_VALUE_INDEX: usize = 2;

impl Kind {
    /// Stable, property-scoped rank of this kind.
    pub fn index(self) -> usize {
        match self {
            Kind::Unset => UNSET_INDEX,
            Kind::Iri => IRI_INDEX,
            Kind::Value(ordinal) => FIRST_VALUE_INDEX + ordinal,
        }
    }

    /// Inverse of [`Kind::index`] for property `P`.
    pub fn from_index<P: Property>(index: usize) -> Option<Kind> {
        match index {
            UNSET_INDEX => Some(Kind::Unset),
            IRI_INDEX => Some(Kind::Iri),
            i if i - FIRST_VALUE_INDEX < P::Value::KINDS.len() => {
                Some(Kind::Value(i - FIRST_VALUE_INDEX))
            }
            _ => None,
        }
    }

    pub fn name<P: Property>(self) -> &'static str {
        match self {
            Kind::Unset => "unset",
            Kind::Iri => "IRI",
            Kind::Value(ordinal) => P::Value::KINDS.get(ordinal).copied().unwrap_or("unknown"),
        }
    }
}

/// All kinds of property `P`, in rank order.
pub fn kinds<P: Property>() -> impl Iterator<Item = Kind> {
    [Kind::Unset, Kind::Iri]
        .into_iter()
        .chain((0..P::Value::KINDS.len()).map(Kind::Value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::properties::{Last, MediaType, Units};

    #[test]
    fn test_fixed_ranks() {
        assert_eq!(Kind::Unset.index(), 0);
        assert_eq!(Kind::Iri.index(), 1);
        assert_eq!(Kind::Value(0).index(), 2);
        assert_eq!(Kind::Value(1).index(), 3);
    }

    #[test]
    fn test_registry_is_injective() {
        let indices: Vec<usize> = kinds::<Last>().map(Kind::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        for kind in kinds::<Last>() {
            assert_eq!(Kind::from_index::<Last>(kind.index()), Some(kind));
        }
        assert_eq!(Kind::from_index::<Last>(4), None);
    }

    #[test]
    fn test_kind_names() {
        let names: Vec<&str> = kinds::<Units>().map(Kind::name::<Units>).collect();
        assert_eq!(names, vec!["unset", "IRI", "xsd:anyURI", "xsd:string"]);
        assert_eq!(kinds::<MediaType>().count(), 3);
        assert_eq!(Kind::Value(9).name::<MediaType>(), "unknown");
    }
}
