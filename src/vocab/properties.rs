//! ActivityStreams property table.
//!
//! Each row instantiates the generic cell for one vocabulary term. Kind
//! ranks follow the row: `Unset`, `IRI`, then the literal kinds in the
//! order listed, then the nested-entity kinds in the order listed.

use chrono::{DateTime, Utc};

use super::ACTIVITY_STREAMS;
use crate::entity::{CollectionPage, Link};
use crate::model::Iri;

// ============================================================================
// Place
// ============================================================================

vocab_property! {
    /// Measurement units for the `radius` and `altitude` of a Place. When
    /// absent, consumers assume `"m"`.
    pub property Units => UnitsValue, UnitsProperty {
        name: "units",
        namespace: ACTIVITY_STREAMS,
        literals {
            XmlSchemaAnyUri(Iri) = "xsd:anyURI" => is_xml_schema_any_uri, get_xml_schema_any_uri, set_xml_schema_any_uri;
            XmlSchemaString(String) = "xsd:string" => is_xml_schema_string, get_xml_schema_string, set_xml_schema_string;
        }
        entities {}
    }
}

vocab_property! {
    /// Distance from the point given by `latitude`/`longitude` that the
    /// Place covers, in `units`.
    pub property Radius => RadiusValue, RadiusProperty {
        name: "radius",
        namespace: ACTIVITY_STREAMS,
        literals {
            XmlSchemaFloat(f64) = "xsd:float" => is_xml_schema_float, get_xml_schema_float, set_xml_schema_float;
        }
        entities {}
    }
}

vocab_property! {
    pub property Latitude => LatitudeValue, LatitudeProperty {
        name: "latitude",
        namespace: ACTIVITY_STREAMS,
        literals {
            XmlSchemaFloat(f64) = "xsd:float" => is_xml_schema_float, get_xml_schema_float, set_xml_schema_float;
        }
        entities {}
    }
}

vocab_property! {
    pub property Longitude => LongitudeValue, LongitudeProperty {
        name: "longitude",
        namespace: ACTIVITY_STREAMS,
        literals {
            XmlSchemaFloat(f64) = "xsd:float" => is_xml_schema_float, get_xml_schema_float, set_xml_schema_float;
        }
        entities {}
    }
}

// ============================================================================
// Link
// ============================================================================

vocab_property! {
    /// Target resource of a Link. Required on every Link.
    pub property Href => HrefValue, HrefProperty {
        name: "href",
        namespace: ACTIVITY_STREAMS,
        literals {
            XmlSchemaAnyUri(Iri) = "xsd:anyURI" => is_xml_schema_any_uri, get_xml_schema_any_uri, set_xml_schema_any_uri;
        }
        entities {}
    }
}

vocab_property! {
    /// MIME media type of the referenced resource.
    pub property MediaType => MediaTypeValue, MediaTypeProperty {
        name: "mediaType",
        namespace: ACTIVITY_STREAMS,
        literals {
            RfcRfc2045(String) = "rfc:rfc2045" => is_rfc_rfc2045, get_rfc_rfc2045, set_rfc_rfc2045;
        }
        entities {}
    }
}

vocab_property! {
    /// Language of the referenced resource, as a BCP 47 tag.
    pub property Hreflang => HreflangValue, HreflangProperty {
        name: "hreflang",
        namespace: ACTIVITY_STREAMS,
        literals {
            RfcBcp47(String) = "rfc:bcp47" => is_rfc_bcp47, get_rfc_bcp47, set_rfc_bcp47;
        }
        entities {}
    }
}

vocab_property! {
    /// Link relation (RFC 5988). Multi-valued.
    pub property Rel => RelValue, RelProperty {
        name: "rel",
        namespace: ACTIVITY_STREAMS,
        literals {
            RfcRfc5988(String) = "rfc:rfc5988" => is_rfc_rfc5988, get_rfc_rfc5988, set_rfc_rfc5988;
        }
        entities {}
    }
}

vocab_property! {
    pub property Name => NameValue, NameProperty {
        name: "name",
        namespace: ACTIVITY_STREAMS,
        literals {
            XmlSchemaString(String) = "xsd:string" => is_xml_schema_string, get_xml_schema_string, set_xml_schema_string;
        }
        entities {}
    }
}

// ============================================================================
// Collection paging
// ============================================================================

vocab_property! {
    /// In a paged Collection, the furthest preceding page.
    pub property First => FirstValue, FirstProperty {
        name: "first",
        namespace: ACTIVITY_STREAMS,
        literals {}
        entities {
            CollectionPage(CollectionPage) = "as:CollectionPage" => is_collection_page, get_collection_page, set_collection_page;
            Link(Link) = "as:Link" => is_link, get_link, set_link;
        }
    }
}

vocab_property! {
    /// In a paged Collection, the furthest proceeding page.
    pub property Last => LastValue, LastProperty {
        name: "last",
        namespace: ACTIVITY_STREAMS,
        literals {}
        entities {
            CollectionPage(CollectionPage) = "as:CollectionPage" => is_collection_page, get_collection_page, set_collection_page;
            Link(Link) = "as:Link" => is_link, get_link, set_link;
        }
    }
}

vocab_property! {
    /// In a paged Collection, the page with the most recently updated items.
    pub property Current => CurrentValue, CurrentProperty {
        name: "current",
        namespace: ACTIVITY_STREAMS,
        literals {}
        entities {
            CollectionPage(CollectionPage) = "as:CollectionPage" => is_collection_page, get_collection_page, set_collection_page;
            Link(Link) = "as:Link" => is_link, get_link, set_link;
        }
    }
}

vocab_property! {
    pub property Next => NextValue, NextProperty {
        name: "next",
        namespace: ACTIVITY_STREAMS,
        literals {}
        entities {
            CollectionPage(CollectionPage) = "as:CollectionPage" => is_collection_page, get_collection_page, set_collection_page;
            Link(Link) = "as:Link" => is_link, get_link, set_link;
        }
    }
}

vocab_property! {
    pub property Prev => PrevValue, PrevProperty {
        name: "prev",
        namespace: ACTIVITY_STREAMS,
        literals {}
        entities {
            CollectionPage(CollectionPage) = "as:CollectionPage" => is_collection_page, get_collection_page, set_collection_page;
            Link(Link) = "as:Link" => is_link, get_link, set_link;
        }
    }
}

vocab_property! {
    /// The collection a page belongs to. A relation to the container, so it
    /// holds an IRI or a Link, never the container itself.
    pub property PartOf => PartOfValue, PartOfProperty {
        name: "partOf",
        namespace: ACTIVITY_STREAMS,
        literals {}
        entities {
            Link(Link) = "as:Link" => is_link, get_link, set_link;
        }
    }
}

vocab_property! {
    /// Members of a collection page. Multi-valued.
    pub property Items => ItemsValue, ItemsProperty {
        name: "items",
        namespace: ACTIVITY_STREAMS,
        literals {}
        entities {
            Link(Link) = "as:Link" => is_link, get_link, set_link;
        }
    }
}

vocab_property! {
    pub property TotalItems => TotalItemsValue, TotalItemsProperty {
        name: "totalItems",
        namespace: ACTIVITY_STREAMS,
        literals {
            XmlSchemaNonNegativeInteger(u64) = "xsd:nonNegativeInteger" => is_xml_schema_non_negative_integer, get_xml_schema_non_negative_integer, set_xml_schema_non_negative_integer;
        }
        entities {}
    }
}

vocab_property! {
    pub property Published => PublishedValue, PublishedProperty {
        name: "published",
        namespace: ACTIVITY_STREAMS,
        literals {
            XmlSchemaDateTime(DateTime<Utc>) = "xsd:dateTime" => is_xml_schema_date_time, get_xml_schema_date_time, set_xml_schema_date_time;
        }
        entities {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{Property, PropertyValue};

    #[test]
    fn test_table_names() {
        assert_eq!(Units::NAME, "units");
        assert_eq!(MediaType::NAME, "mediaType");
        assert_eq!(PartOf::NAME, "partOf");
        assert_eq!(TotalItems::NAME, "totalItems");
        assert_eq!(Last::NAMESPACE, ACTIVITY_STREAMS);
    }

    #[test]
    fn test_literals_rank_before_entities() {
        assert_eq!(UnitsValue::KINDS, &["xsd:anyURI", "xsd:string"]);
        assert_eq!(LastValue::KINDS, &["as:CollectionPage", "as:Link"]);
        assert_eq!(UnitsValue::XmlSchemaString("m".into()).ordinal(), 1);
        assert_eq!(LastValue::Link(Box::default()).ordinal(), 1);
    }
}
