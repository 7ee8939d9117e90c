//! Layers the game adds once the map is ready.

use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::domain::{DEFAULT_LINE_COLOR, LINE_COLORS};
use crate::gazetteer::{Gazetteer, LineDataset};

use super::spec::{LayerSpec, SourceSpec};
use super::{MapError, MapWidget};

/// Id of both the combined line-path source and its layer.
pub const LINES_LAYER_ID: &str = "tube-lines";

/// Fill of an undiscovered station marker.
pub const STATION_FILL_COLOR: &str = "#ffffff";

/// Outline of a station marker.
pub const STATION_STROKE_COLOR: &str = "#000000";

/// `line-color` expression coloring each path by the first line it carries.
pub fn line_color_expression() -> Value {
    let mut expr = vec![
        json!("match"),
        json!(["get", "name", ["at", 0, ["get", "lines"]]]),
    ];
    for (name, color) in LINE_COLORS {
        expr.push(json!(name));
        expr.push(json!(color));
    }
    expr.push(json!(DEFAULT_LINE_COLOR));
    Value::Array(expr)
}

/// Circle layer drawing one line's station markers.
pub fn station_layer(line: &LineDataset) -> LayerSpec {
    LayerSpec::circle(line.layer_id(), line.source_id())
        .paint("circle-radius", json!(4))
        .paint("circle-color", json!(STATION_FILL_COLOR))
        .paint("circle-stroke-width", json!(1))
        .paint("circle-stroke-color", json!(STATION_STROKE_COLOR))
}

fn install_paths<M: MapWidget + ?Sized>(map: &mut M, paths: &Value) -> Result<(), MapError> {
    map.add_source(LINES_LAYER_ID, SourceSpec::geojson(paths.clone()))?;
    map.add_layer(
        LayerSpec::line(LINES_LAYER_ID, LINES_LAYER_ID)
            .paint("line-color", line_color_expression())
            .paint("line-width", json!(2.5))
            .paint("line-opacity", json!(0.8)),
        None,
    )
}

fn install_line<M: MapWidget + ?Sized>(map: &mut M, line: &LineDataset) -> Result<(), MapError> {
    map.add_source(&line.source_id(), SourceSpec::geojson(line.to_collection().to_value()))?;
    map.add_layer(station_layer(line), None)
}

/// Add the line paths and every line's station markers to the map.
///
/// A source or layer the map refuses is skipped with a warning; the other
/// lines still go in. Paths end up below the first station layer so
/// markers draw on top. Returns the number of station layers added.
pub fn install_network<M: MapWidget + ?Sized>(map: &mut M, gazetteer: &Gazetteer) -> usize {
    if let Some(paths) = gazetteer.paths()
        && let Err(e) = install_paths(map, paths)
    {
        warn!(error = %e, "skipping line paths");
    }

    let mut installed = 0;
    let mut first_layer = None;
    for line in gazetteer.lines() {
        match install_line(map, line) {
            Ok(()) => {
                debug!(layer = %line.layer_id(), stations = line.stations().len(), "added station layer");
                first_layer.get_or_insert_with(|| line.layer_id());
                installed += 1;
            }
            Err(e) => warn!(line = %line.id(), error = %e, "skipping line"),
        }
    }

    if let Some(first) = first_layer
        && map.has_layer(LINES_LAYER_ID)
        && let Err(e) = map.move_layer(LINES_LAYER_ID, Some(&first))
    {
        warn!(error = %e, "could not move line paths below stations");
    }

    installed
}
