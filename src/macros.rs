//! `vocab_property!`: one table row per vocabulary term.
//!
//! A row names the term, its namespace and its permitted kinds. Literal
//! kinds come first, nested-entity kinds after; that order is the rank
//! order used by the kind registry and the cell ordering.
//!
//! ```ignore
//! vocab_property! {
//!     /// Measurement units for `radius` and `altitude`.
//!     pub property Units => UnitsValue, UnitsProperty {
//!         name: "units",
//!         namespace: ACTIVITY_STREAMS,
//!         literals {
//!             XmlSchemaAnyUri(Iri) = "xsd:anyURI" => is_xml_schema_any_uri, get_xml_schema_any_uri, set_xml_schema_any_uri;
//!             XmlSchemaString(String) = "xsd:string" => is_xml_schema_string, get_xml_schema_string, set_xml_schema_string;
//!         }
//!         entities {}
//!     }
//! }
//! ```
//!
//! Expands to the marker `Units`, the value enum `UnitsValue`, the alias
//! `UnitsProperty = PropertyCell<Units>`, and typed `is_*`/`get_*`/`set_*`
//! accessors on that cell.

macro_rules! vocab_property {
    (
        $(#[$meta:meta])*
        $vis:vis property $marker:ident => $value:ident, $cell:ident {
            name: $name:literal,
            namespace: $ns:expr,
            literals {
                $( $lvar:ident($lty:ty) = $lkind:literal => $lis:ident, $lget:ident, $lset:ident; )*
            }
            entities {
                $( $evar:ident($ety:ty) = $ekind:literal => $eis:ident, $eget:ident, $eset:ident; )*
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        $vis struct $marker;

        impl $crate::property::Property for $marker {
            const NAME: &'static str = $name;
            const NAMESPACE: &'static str = $ns;
            type Value = $value;
        }

        #[doc = concat!("Non-IRI values of the `", $name, "` property.")]
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $value {
            $( $lvar($lty), )*
            $( $evar(Box<$ety>), )*
        }

        #[doc = concat!("Cell holding one `", $name, "` value.")]
        $vis type $cell = $crate::property::PropertyCell<$marker>;

        impl $crate::property::PropertyValue for $value {
            const KINDS: &'static [&'static str] = &[ $( $lkind, )* $( $ekind, )* ];

            fn ordinal(&self) -> usize {
                #[allow(dead_code)]
                enum Ordinal { $( $lvar, )* $( $evar, )* }
                match self {
                    $( Self::$lvar(_) => Ordinal::$lvar as usize, )*
                    $( Self::$evar(_) => Ordinal::$evar as usize, )*
                }
            }

            #[allow(unreachable_patterns)]
            fn compare(&self, other: &Self) -> ::std::cmp::Ordering {
                match (self, other) {
                    $( (Self::$lvar(a), Self::$lvar(b)) => $crate::model::Literal::compare(a, b), )*
                    $( (Self::$evar(a), Self::$evar(b)) => $crate::entity::Entity::compare(&**a, &**b), )*
                    _ => self.ordinal().cmp(&other.ordinal()),
                }
            }

            fn serialize(&self) -> $crate::Result<$crate::model::TreeValue> {
                match self {
                    $( Self::$lvar(v) => $crate::model::Literal::serialize(v), )*
                    $( Self::$evar(v) => $crate::entity::Entity::serialize(&**v), )*
                }
            }

            fn jsonld_context(&self) -> $crate::model::ContextMap {
                match self {
                    $( Self::$lvar(_) => $crate::model::ContextMap::new(), )*
                    $( Self::$evar(v) => $crate::entity::Entity::jsonld_context(&**v), )*
                }
            }

            fn deserialize(
                tree: &$crate::model::TreeValue,
                aliases: &$crate::model::ContextMap,
            ) -> $crate::Result<Self> {
                let _ = aliases;
                let mut rejection = None;
                $(
                    match <$lty as $crate::model::Literal>::deserialize(tree) {
                        Ok(v) => return Ok(Self::$lvar(v)),
                        Err(error) => {
                            ::tracing::trace!(property = $name, kind = $lkind, %error, "Kind rejected value");
                            $crate::property::keep_rejection(&mut rejection, error);
                        }
                    }
                )*
                $(
                    match <$ety as $crate::entity::Entity>::deserialize(tree, aliases) {
                        Ok(v) => return Ok(Self::$evar(Box::new(v))),
                        Err(error) => {
                            ::tracing::trace!(property = $name, kind = $ekind, %error, "Kind rejected value");
                            $crate::property::keep_rejection(&mut rejection, error);
                        }
                    }
                )*
                Err(rejection.unwrap_or_else(|| $crate::Error::TypeError {
                    expected: $name.to_string(),
                    got: $crate::model::tree::type_name(tree).to_string(),
                }))
            }

            fn normalize(&mut self) {
                match self {
                    $( Self::$lvar(_) => {} )*
                    $( Self::$evar(v) => $crate::entity::Entity::normalize(&mut **v), )*
                }
            }

            fn set_alias(&mut self, alias: &str) {
                let _ = alias;
                match self {
                    $( Self::$lvar(_) => {} )*
                    $( Self::$evar(v) => $crate::entity::Entity::set_alias(&mut **v, alias), )*
                }
            }
        }

        impl $crate::property::PropertyCell<$marker> {
            $(
                #[doc = concat!("True if the `", $lkind, "` variant is populated.")]
                pub fn $lis(&self) -> bool {
                    matches!(self.value(), Some($value::$lvar(_)))
                }

                #[doc = concat!("The `", $lkind, "` value; `None` when another variant is populated.")]
                pub fn $lget(&self) -> Option<&$lty> {
                    match self.value() {
                        Some($value::$lvar(v)) => Some(v),
                        _ => None,
                    }
                }

                #[doc = concat!("Store a `", $lkind, "` value, replacing any other variant.")]
                pub fn $lset(&mut self, v: $lty) {
                    self.set($value::$lvar(v));
                }
            )*
            $(
                #[doc = concat!("True if the `", $ekind, "` variant is populated.")]
                pub fn $eis(&self) -> bool {
                    matches!(self.value(), Some($value::$evar(_)))
                }

                #[doc = concat!("The nested `", $ekind, "`; `None` when another variant is populated.")]
                pub fn $eget(&self) -> Option<&$ety> {
                    match self.value() {
                        Some($value::$evar(v)) => Some(&**v),
                        _ => None,
                    }
                }

                #[doc = concat!("Store a nested `", $ekind, "`, replacing any other variant.")]
                pub fn $eset(&mut self, v: $ety) {
                    self.set($value::$evar(Box::new(v)));
                }
            )*
        }
    };
}
