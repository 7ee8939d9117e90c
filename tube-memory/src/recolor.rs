//! Per-line station marker colors.
//!
//! Each station layer keeps an explicit map of discovered station → line
//! color and the paint it had before the first discovery. Every change
//! rebuilds one flat `match` expression from that state, so the result
//! doesn't depend on discovery order and never nests.
//!
//! The "just found it" highlight lives on the marker outline
//! (`circle-stroke-color`) and is tracked separately, so it can't disturb
//! the fill colors.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::gazetteer::Gazetteer;
use crate::map::{MapWidget, STATION_FILL_COLOR, STATION_STROKE_COLOR};

/// Outline color of the most recently validated station.
pub const HIGHLIGHT_COLOR: &str = "#ff0000";

const FILL_PROPERTY: &str = "circle-color";
const STROKE_PROPERTY: &str = "circle-stroke-color";

/// `["match", ["get", "name"], name, value, ..., fallback]`, or just the
/// fallback when there is nothing to match.
fn name_match<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>, fallback: &Value) -> Value {
    let mut expr = vec![json!("match"), json!(["get", "name"])];
    for (name, value) in entries {
        expr.push(json!(name));
        expr.push(json!(value));
    }
    if expr.len() == 2 {
        return fallback.clone();
    }
    expr.push(fallback.clone());
    Value::Array(expr)
}

#[derive(Debug, Clone)]
struct LayerColors {
    /// Fill before any discovery touched the layer.
    base: Value,
    /// Station name → line color.
    colors: BTreeMap<String, &'static str>,
}

impl LayerColors {
    fn expression(&self) -> Value {
        name_match(
            self.colors.iter().map(|(name, color)| (name.as_str(), *color)),
            &self.base,
        )
    }
}

#[derive(Debug, Clone)]
struct Flash {
    station: String,
    /// Layer id → outline paint to put back.
    restore: Vec<(String, Value)>,
}

/// Tracks which stations are colored on which layer.
#[derive(Debug, Clone, Default)]
pub struct RecolorEngine {
    layers: HashMap<String, LayerColors>,
    flash: Option<Flash>,
}

impl RecolorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color `station` in its line's color on every line serving it.
    ///
    /// Lines whose layer isn't on the map are skipped. Returns the number
    /// of layers repainted.
    pub fn highlight_discovered<M: MapWidget + ?Sized>(
        &mut self,
        map: &mut M,
        gazetteer: &Gazetteer,
        station: &str,
    ) -> usize {
        let mut repainted = 0;

        for (line, _) in gazetteer.lines_serving(station) {
            let layer = line.layer_id();
            if !map.has_layer(&layer) {
                debug!(%layer, station, "station layer missing, skipping recolor");
                continue;
            }

            let entry = self.layers.entry(layer.clone()).or_insert_with(|| LayerColors {
                base: map
                    .paint_property(&layer, FILL_PROPERTY)
                    .unwrap_or_else(|| json!(STATION_FILL_COLOR)),
                colors: BTreeMap::new(),
            });
            entry.colors.insert(station.to_string(), line.color());

            match map.set_paint_property(&layer, FILL_PROPERTY, entry.expression()) {
                Ok(()) => repainted += 1,
                Err(e) => warn!(%layer, station, error = %e, "failed to recolor station"),
            }
        }

        repainted
    }

    /// Outline `station` in [`HIGHLIGHT_COLOR`], clearing any previous highlight.
    ///
    /// Returns the number of layers highlighted.
    pub fn flash<M: MapWidget + ?Sized>(
        &mut self,
        map: &mut M,
        gazetteer: &Gazetteer,
        station: &str,
    ) -> usize {
        self.clear_flash(map);

        let mut restore = Vec::new();
        for (line, _) in gazetteer.lines_serving(station) {
            let layer = line.layer_id();
            if !map.has_layer(&layer) {
                continue;
            }

            let base = map
                .paint_property(&layer, STROKE_PROPERTY)
                .unwrap_or_else(|| json!(STATION_STROKE_COLOR));
            let expr = name_match([(station, HIGHLIGHT_COLOR)], &base);
            match map.set_paint_property(&layer, STROKE_PROPERTY, expr) {
                Ok(()) => restore.push((layer, base)),
                Err(e) => warn!(%layer, station, error = %e, "failed to highlight station"),
            }
        }

        let count = restore.len();
        self.flash = Some(Flash {
            station: station.to_string(),
            restore,
        });
        count
    }

    /// Put back the outlines changed by the last [`flash`](Self::flash).
    pub fn clear_flash<M: MapWidget + ?Sized>(&mut self, map: &mut M) {
        let Some(flash) = self.flash.take() else {
            return;
        };
        for (layer, base) in flash.restore {
            if let Err(e) = map.set_paint_property(&layer, STROKE_PROPERTY, base) {
                debug!(%layer, error = %e, "could not clear highlight");
            }
        }
    }

    /// Color assigned to `station` on `layer`, if any.
    pub fn color_of(&self, layer: &str, station: &str) -> Option<&'static str> {
        self.layers.get(layer)?.colors.get(station).copied()
    }

    /// Station currently outlined, if any.
    pub fn flashed(&self) -> Option<&str> {
        self.flash.as_ref().map(|f| f.station.as_str())
    }
}
