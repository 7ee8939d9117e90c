//! The map widget seen as a capability set.
//!
//! The game never renders anything itself. It adds sources and layers,
//! rewrites paint properties and moves the camera through [`MapWidget`].
//! The browser bridge implements it over MapLibre; [`HeadlessMap`] keeps
//! everything in memory for tests and server-side checks.

mod headless;
mod spec;
mod style;

pub use headless::HeadlessMap;
pub use spec::{LayerKind, LayerSpec, SourceSpec};
pub use style::{
    LINES_LAYER_ID, STATION_FILL_COLOR, STATION_STROKE_COLOR, install_network,
    line_color_expression, station_layer,
};

use serde_json::Value;

use crate::domain::Coordinates;

/// Errors reported by a map widget.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MapError {
    /// No layer with this id exists
    #[error("unknown layer: {0}")]
    UnknownLayer(String),

    /// No source with this id exists
    #[error("unknown source: {0}")]
    UnknownSource(String),

    /// A layer with this id already exists
    #[error("layer already exists: {0}")]
    DuplicateLayer(String),

    /// A source with this id already exists
    #[error("source already exists: {0}")]
    DuplicateSource(String),

    /// The underlying widget rejected the call
    #[error("map widget error: {0}")]
    Widget(String),
}

/// Target of a camera movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub center: Coordinates,
    pub zoom: f64,
}

/// Operations the game needs from a map widget.
pub trait MapWidget {
    fn add_source(&mut self, id: &str, source: SourceSpec) -> Result<(), MapError>;

    /// Add a layer on top, or below `before` when given.
    fn add_layer(&mut self, layer: LayerSpec, before: Option<&str>) -> Result<(), MapError>;

    fn has_layer(&self, id: &str) -> bool;

    fn has_source(&self, id: &str) -> bool;

    /// Replace the data of a GeoJSON source.
    fn set_source_data(&mut self, id: &str, data: Value) -> Result<(), MapError>;

    /// Current value of a paint property, `None` when unset or the layer is missing.
    fn paint_property(&self, layer: &str, property: &str) -> Option<Value>;

    fn set_paint_property(&mut self, layer: &str, property: &str, value: Value)
    -> Result<(), MapError>;

    /// Move a layer below `before`, or to the top when `None`.
    fn move_layer(&mut self, id: &str, before: Option<&str>) -> Result<(), MapError>;

    fn fly_to(&mut self, camera: Camera);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            MapError::UnknownLayer("central-stations".into()).to_string(),
            "unknown layer: central-stations"
        );
        assert_eq!(
            MapError::DuplicateSource("tube-lines".into()).to_string(),
            "source already exists: tube-lines"
        );
        assert_eq!(
            MapError::Widget("style is not done loading".into()).to_string(),
            "map widget error: style is not done loading"
        );
    }
}
