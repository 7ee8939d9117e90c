//! Source and layer descriptions, serialized in MapLibre style-spec form.

use serde::Serialize;
use serde_json::{Map, Value};

/// A map data source.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceSpec {
    GeoJson { data: Value },
}

impl SourceSpec {
    pub fn geojson(data: Value) -> Self {
        SourceSpec::GeoJson { data }
    }

    pub fn data(&self) -> &Value {
        match self {
            SourceSpec::GeoJson { data } => data,
        }
    }
}

/// Kind of a style layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Circle,
    Line,
    Symbol,
}

/// A style layer reading from a named source.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tube_memory::map::LayerSpec;
///
/// let layer = LayerSpec::circle("central-stations", "central-line")
///     .paint("circle-radius", json!(4));
/// assert_eq!(
///     layer.to_value(),
///     json!({
///         "id": "central-stations",
///         "type": "circle",
///         "source": "central-line",
///         "paint": { "circle-radius": 4 }
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerSpec {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LayerKind,
    pub source: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub layout: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub paint: Map<String, Value>,
}

impl LayerSpec {
    pub fn new(id: impl Into<String>, kind: LayerKind, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            source: source.into(),
            layout: Map::new(),
            paint: Map::new(),
        }
    }

    pub fn circle(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(id, LayerKind::Circle, source)
    }

    pub fn line(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(id, LayerKind::Line, source)
    }

    pub fn symbol(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(id, LayerKind::Symbol, source)
    }

    pub fn paint(mut self, property: &str, value: Value) -> Self {
        self.paint.insert(property.to_string(), value);
        self
    }

    pub fn layout(mut self, property: &str, value: Value) -> Self {
        self.layout.insert(property.to_string(), value);
        self
    }

    /// Style-spec JSON for this layer.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
