//! Minimal GeoJSON types for named point features.
//!
//! Only what the game reads and writes: a `FeatureCollection` of `Point`
//! features carrying a `name` property. The `type` tags are checked on
//! deserialization and always emitted on serialization, so the output can
//! be handed straight to a map source. Extra properties are ignored.

use serde::{Deserialize, Serialize};

use crate::domain::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
enum CollectionTag {
    #[default]
    FeatureCollection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
enum FeatureTag {
    #[default]
    Feature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
enum PointTag {
    #[default]
    Point,
}

/// Properties of a named feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameProperties {
    pub name: String,
}

/// A `Point` geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    tag: PointTag,
    pub coordinates: Coordinates,
}

/// A `Feature` with a point geometry and a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointFeature {
    #[serde(rename = "type")]
    tag: FeatureTag,
    pub properties: NameProperties,
    pub geometry: PointGeometry,
}

impl PointFeature {
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            tag: FeatureTag::Feature,
            properties: NameProperties { name: name.into() },
            geometry: PointGeometry {
                tag: PointTag::Point,
                coordinates,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.properties.name
    }

    pub fn coordinates(&self) -> Coordinates {
        self.geometry.coordinates
    }
}

/// A `FeatureCollection` of named points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    tag: CollectionTag,
    pub features: Vec<PointFeature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<PointFeature>) -> Self {
        Self {
            tag: CollectionTag::FeatureCollection,
            features,
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// JSON form, suitable as map source data.
    pub fn to_value(&self) -> serde_json::Value {
        // Serializing these plain structs cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn coords(lon: f64, lat: f64) -> Coordinates {
        Coordinates::new(lon, lat).unwrap()
    }

    #[test]
    fn parses_station_dataset() {
        let input = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "name": "Bank", "zone": 1 },
                    "geometry": { "type": "Point", "coordinates": [-0.0886, 51.5133] }
                }
            ]
        });

        let fc: FeatureCollection = serde_json::from_value(input).unwrap();
        assert_eq!(fc.len(), 1);
        assert_eq!(fc.features[0].name(), "Bank");
        assert_eq!(fc.features[0].coordinates(), coords(-0.0886, 51.5133));
    }

    #[test]
    fn accepts_positions_with_altitude() {
        let input = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "name": "Bank" },
                    "geometry": { "type": "Point", "coordinates": [-0.0886, 51.5133, 0.0] }
                },
                {
                    "type": "Feature",
                    "properties": { "name": "Waterloo" },
                    "geometry": { "type": "Point", "coordinates": [-0.1133, 51.5036] }
                }
            ]
        });

        let fc: FeatureCollection = serde_json::from_value(input).unwrap();
        assert_eq!(fc.len(), 2);
        assert_eq!(fc.features[0].coordinates(), coords(-0.0886, 51.5133));
        assert_eq!(
            fc.to_value()["features"][0]["geometry"]["coordinates"],
            json!([-0.0886, 51.5133])
        );
    }

    #[test]
    fn rejects_non_point_geometry() {
        let input = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "name": "Bank" },
                    "geometry": { "type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]] }
                }
            ]
        });

        assert!(serde_json::from_value::<FeatureCollection>(input).is_err());
    }

    #[test]
    fn rejects_wrong_collection_tag() {
        let input = json!({ "type": "Feature", "features": [] });
        assert!(serde_json::from_value::<FeatureCollection>(input).is_err());
    }

    #[test]
    fn rejects_missing_name() {
        let input = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": { "type": "Point", "coordinates": [0.0, 0.0] }
                }
            ]
        });
        assert!(serde_json::from_value::<FeatureCollection>(input).is_err());
    }

    #[test]
    fn serializes_with_type_tags() {
        let fc = FeatureCollection::new(vec![PointFeature::new(
            "Oxford Circus",
            coords(-0.1415, 51.5152),
        )]);

        assert_eq!(
            fc.to_value(),
            json!({
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "properties": { "name": "Oxford Circus" },
                        "geometry": { "type": "Point", "coordinates": [-0.1415, 51.5152] }
                    }
                ]
            })
        );
    }

    #[test]
    fn empty_collection() {
        let fc = FeatureCollection::default();
        assert!(fc.is_empty());
        assert_eq!(fc.to_value(), json!({ "type": "FeatureCollection", "features": [] }));
    }
}
