//! Name labels for discovered stations.

use std::collections::HashSet;

use serde_json::json;
use tracing::debug;

use crate::domain::Coordinates;
use crate::geojson::{FeatureCollection, PointFeature};
use crate::map::{LayerSpec, MapError, MapWidget, SourceSpec};

/// Id of the label source and its symbol layer.
pub const LABEL_LAYER_ID: &str = "station-labels";

/// Symbol layer drawing station names under their markers.
pub fn label_layer() -> LayerSpec {
    LayerSpec::symbol(LABEL_LAYER_ID, LABEL_LAYER_ID)
        .layout("text-field", json!(["get", "name"]))
        .layout("text-size", json!(12))
        .layout("text-font", json!(["Noto Sans Regular"]))
        .layout("text-anchor", json!("top"))
        .layout("text-offset", json!([0, 0.6]))
        .paint("text-color", json!("#000000"))
        .paint("text-halo-color", json!("#ffffff"))
        .paint("text-halo-width", json!(2))
}

/// The label collection and the map layer showing it.
///
/// The layer is created lazily on first use. Labels are keyed by the
/// station's published name and only ever added.
#[derive(Debug, Clone, Default)]
pub struct LabelLayer {
    created: bool,
    names: HashSet<String>,
    collection: FeatureCollection,
}

impl LabelLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the label source and layer if this map doesn't have them yet.
    pub fn ensure_layer<M: MapWidget + ?Sized>(&mut self, map: &mut M) -> Result<(), MapError> {
        if self.created && map.has_layer(LABEL_LAYER_ID) {
            return Ok(());
        }

        if !map.has_source(LABEL_LAYER_ID) {
            map.add_source(LABEL_LAYER_ID, SourceSpec::geojson(self.collection.to_value()))?;
        }
        if !map.has_layer(LABEL_LAYER_ID) {
            map.add_layer(label_layer(), None)?;
            debug!("created station label layer");
        }
        self.created = true;
        Ok(())
    }

    /// Add a label unless `name` already has one.
    ///
    /// Returns whether a label was added. The layer is created first if
    /// needed, and the whole collection is pushed to the map source.
    pub fn add_label<M: MapWidget + ?Sized>(
        &mut self,
        map: &mut M,
        name: &str,
        coordinates: Coordinates,
    ) -> Result<bool, MapError> {
        self.ensure_layer(map)?;

        if self.names.contains(name) {
            return Ok(false);
        }

        self.collection
            .features
            .push(PointFeature::new(name, coordinates));
        if let Err(e) = map.set_source_data(LABEL_LAYER_ID, self.collection.to_value()) {
            self.collection.features.pop();
            return Err(e);
        }
        self.names.insert(name.to_string());
        Ok(true)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn features(&self) -> &[PointFeature] {
        &self.collection.features
    }

    pub fn is_created(&self) -> bool {
        self.created
    }
}
