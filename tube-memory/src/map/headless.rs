//! In-memory map widget.
//!
//! Tracks sources, layers (in draw order), paint properties and the last
//! camera move, with the same failure modes as a real widget: unknown ids
//! are errors and ids must be unique.

use std::collections::BTreeMap;

use serde_json::Value;

use super::spec::{LayerSpec, SourceSpec};
use super::{Camera, MapError, MapWidget};

/// Map widget that renders nothing and remembers everything.
#[derive(Debug, Clone, Default)]
pub struct HeadlessMap {
    sources: BTreeMap<String, Value>,
    /// Bottom to top.
    layers: Vec<LayerSpec>,
    camera: Option<Camera>,
}

impl HeadlessMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn layer_index(&self, id: &str) -> Option<usize> {
        self.layers.iter().position(|l| l.id == id)
    }

    /// Layer ids, bottom to top.
    pub fn layer_order(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.id.as_str()).collect()
    }

    pub fn layer(&self, id: &str) -> Option<&LayerSpec> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn source_data(&self, id: &str) -> Option<&Value> {
        self.sources.get(id)
    }

    /// Last camera target passed to `fly_to`.
    pub fn camera(&self) -> Option<Camera> {
        self.camera
    }
}

impl MapWidget for HeadlessMap {
    fn add_source(&mut self, id: &str, source: SourceSpec) -> Result<(), MapError> {
        if self.sources.contains_key(id) {
            return Err(MapError::DuplicateSource(id.to_string()));
        }
        self.sources.insert(id.to_string(), source.data().clone());
        Ok(())
    }

    fn add_layer(&mut self, layer: LayerSpec, before: Option<&str>) -> Result<(), MapError> {
        if self.layer_index(&layer.id).is_some() {
            return Err(MapError::DuplicateLayer(layer.id));
        }
        if !self.sources.contains_key(&layer.source) {
            return Err(MapError::UnknownSource(layer.source));
        }

        let position = match before {
            Some(before) => self
                .layer_index(before)
                .ok_or_else(|| MapError::UnknownLayer(before.to_string()))?,
            None => self.layers.len(),
        };
        self.layers.insert(position, layer);
        Ok(())
    }

    fn has_layer(&self, id: &str) -> bool {
        self.layer_index(id).is_some()
    }

    fn has_source(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    fn set_source_data(&mut self, id: &str, data: Value) -> Result<(), MapError> {
        let slot = self
            .sources
            .get_mut(id)
            .ok_or_else(|| MapError::UnknownSource(id.to_string()))?;
        *slot = data;
        Ok(())
    }

    fn paint_property(&self, layer: &str, property: &str) -> Option<Value> {
        self.layer(layer)?.paint.get(property).cloned()
    }

    fn set_paint_property(
        &mut self,
        layer: &str,
        property: &str,
        value: Value,
    ) -> Result<(), MapError> {
        let index = self
            .layer_index(layer)
            .ok_or_else(|| MapError::UnknownLayer(layer.to_string()))?;
        self.layers[index].paint.insert(property.to_string(), value);
        Ok(())
    }

    fn move_layer(&mut self, id: &str, before: Option<&str>) -> Result<(), MapError> {
        let from = self
            .layer_index(id)
            .ok_or_else(|| MapError::UnknownLayer(id.to_string()))?;
        if let Some(before) = before
            && self.layer_index(before).is_none()
        {
            return Err(MapError::UnknownLayer(before.to_string()));
        }

        let layer = self.layers.remove(from);
        let to = match before {
            Some(before) => self.layer_index(before).unwrap_or(self.layers.len()),
            None => self.layers.len(),
        };
        self.layers.insert(to, layer);
        Ok(())
    }

    fn fly_to(&mut self, camera: Camera) {
        self.camera = Some(camera);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{BANK, coords};
    use serde_json::json;

    fn map_with_source() -> HeadlessMap {
        let mut map = HeadlessMap::new();
        map.add_source("src", SourceSpec::geojson(json!(null))).unwrap();
        map
    }

    #[test]
    fn duplicate_source_rejected() {
        let mut map = map_with_source();
        let err = map.add_source("src", SourceSpec::geojson(json!(null))).unwrap_err();
        assert_eq!(err, MapError::DuplicateSource("src".into()));
    }

    #[test]
    fn layer_needs_source() {
        let mut map = HeadlessMap::new();
        let err = map.add_layer(LayerSpec::circle("a", "missing"), None).unwrap_err();
        assert_eq!(err, MapError::UnknownSource("missing".into()));
    }

    #[test]
    fn layers_stack_in_order() {
        let mut map = map_with_source();
        map.add_layer(LayerSpec::circle("a", "src"), None).unwrap();
        map.add_layer(LayerSpec::circle("b", "src"), None).unwrap();
        map.add_layer(LayerSpec::line("c", "src"), Some("a")).unwrap();
        assert_eq!(map.layer_order(), vec!["c", "a", "b"]);
    }

    #[test]
    fn duplicate_layer_rejected() {
        let mut map = map_with_source();
        map.add_layer(LayerSpec::circle("a", "src"), None).unwrap();
        let err = map.add_layer(LayerSpec::circle("a", "src"), None).unwrap_err();
        assert_eq!(err, MapError::DuplicateLayer("a".into()));
    }

    #[test]
    fn move_layer_below() {
        let mut map = map_with_source();
        for id in ["a", "b", "c"] {
            map.add_layer(LayerSpec::circle(id, "src"), None).unwrap();
        }

        map.move_layer("c", Some("a")).unwrap();
        assert_eq!(map.layer_order(), vec!["c", "a", "b"]);

        map.move_layer("c", None).unwrap();
        assert_eq!(map.layer_order(), vec!["a", "b", "c"]);

        assert!(map.move_layer("c", Some("zzz")).is_err());
        assert_eq!(map.layer_order(), vec!["a", "b", "c"]);
    }

    #[test]
    fn paint_properties() {
        let mut map = map_with_source();
        map.add_layer(LayerSpec::circle("a", "src").paint("circle-color", json!("#ffffff")), None)
            .unwrap();

        assert_eq!(map.paint_property("a", "circle-color"), Some(json!("#ffffff")));
        assert_eq!(map.paint_property("a", "circle-radius"), None);
        assert_eq!(map.paint_property("zzz", "circle-color"), None);

        map.set_paint_property("a", "circle-color", json!("#ff0000")).unwrap();
        assert_eq!(map.paint_property("a", "circle-color"), Some(json!("#ff0000")));

        assert!(map.set_paint_property("zzz", "circle-color", json!("#ff0000")).is_err());
    }

    #[test]
    fn source_data_replaced() {
        let mut map = map_with_source();
        map.set_source_data("src", json!({ "features": [] })).unwrap();
        assert_eq!(map.source_data("src"), Some(&json!({ "features": [] })));
        assert!(map.set_source_data("other", json!(null)).is_err());
    }

    #[test]
    fn fly_to_records_camera() {
        let mut map = HeadlessMap::new();
        assert!(map.camera().is_none());
        map.fly_to(Camera { center: coords(BANK), zoom: 15.0 });
        assert_eq!(map.camera().unwrap().center, coords(BANK));
    }
}
