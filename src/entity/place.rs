//! Place: a logical or physical location.

use std::cmp::Ordering;

use super::{begin_object, expect_object, read_id, Entity, PropertyReader};
use crate::model::{ContextMap, Iri, TreeMap, TreeValue};
use crate::vocab::properties::{
    LatitudeProperty, LongitudeProperty, NameProperty, RadiusProperty, UnitsProperty,
};
use crate::vocab::ACTIVITY_STREAMS;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Place {
    pub id: Option<Iri>,
    pub name: NameProperty,
    pub latitude: LatitudeProperty,
    pub longitude: LongitudeProperty,
    pub radius: RadiusProperty,
    pub units: UnitsProperty,
    pub extensions: ContextMap,
    pub unknown: TreeMap,
    alias: String,
}

impl Entity for Place {
    const TYPE_NAME: &'static str = "Place";

    fn alias(&self) -> &str {
        &self.alias
    }

    fn set_alias(&mut self, alias: &str) {
        self.alias = alias.to_owned();
        self.name.set_alias(alias);
        self.latitude.set_alias(alias);
        self.longitude.set_alias(alias);
        self.radius.set_alias(alias);
        self.units.set_alias(alias);
    }

    fn serialize(&self) -> Result<TreeValue> {
        let mut object = begin_object(&self.alias, Self::TYPE_NAME, self.id.as_ref());
        self.name.serialize_into(&mut object)?;
        self.latitude.serialize_into(&mut object)?;
        self.longitude.serialize_into(&mut object)?;
        self.radius.serialize_into(&mut object)?;
        self.units.serialize_into(&mut object)?;
        for (key, value) in &self.unknown {
            object.entry(key.clone()).or_insert_with(|| value.clone());
        }
        Ok(TreeValue::Object(object))
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.id
            .cmp(&other.id)
            .then_with(|| self.name.compare(&other.name))
            .then_with(|| self.latitude.compare(&other.latitude))
            .then_with(|| self.longitude.compare(&other.longitude))
            .then_with(|| self.radius.compare(&other.radius))
            .then_with(|| self.units.compare(&other.units))
    }

    fn jsonld_context(&self) -> ContextMap {
        let mut context = ContextMap::with_entry(ACTIVITY_STREAMS, self.alias.as_str());
        context.union(self.name.jsonld_context());
        context.union(self.latitude.jsonld_context());
        context.union(self.longitude.jsonld_context());
        context.union(self.radius.jsonld_context());
        context.union(self.units.jsonld_context());
        context.union(self.extensions.clone());
        context
    }

    fn deserialize(tree: &TreeValue, aliases: &ContextMap) -> Result<Self> {
        let object = expect_object(tree, aliases, Self::TYPE_NAME)?;
        let mut reader = PropertyReader::new(object, aliases);

        let mut place = Place {
            id: read_id(object)?,
            name: reader.cell(),
            latitude: reader.cell(),
            longitude: reader.cell(),
            radius: reader.cell(),
            units: reader.cell(),
            ..Default::default()
        };
        place.unknown = reader.finish(&mut place.extensions);
        place.set_alias(aliases.alias_for(ACTIVITY_STREAMS).unwrap_or_default());
        Ok(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_units_example() {
        let tree = json!({
            "latitude": 36.75,
            "longitude": 119.7667,
            "name": "Fresno Area",
            "radius": 15,
            "type": "Place",
            "units": "miles"
        });
        let place = Place::deserialize(&tree, &ContextMap::with_entry(ACTIVITY_STREAMS, "")).unwrap();
        assert_eq!(place.radius.get_xml_schema_float(), Some(&15.0));
        assert!(place.units.is_xml_schema_string());
        assert_eq!(place.serialize().unwrap(), tree);
    }

    #[test]
    fn test_nan_radius_fails_with_property_name() {
        let mut place = Place::default();
        place.radius.set_xml_schema_float(f64::NAN);
        let err = place.serialize().unwrap_err();
        assert!(err.to_string().starts_with("Property 'radius'"), "{err}");
    }
}
