//! Line datasets and the gazetteer that holds them.

use std::collections::HashSet;

use serde_json::Value;

use crate::domain::{
    DomainError, LineId, StationKey, StationRecord, derive_display_name, line_color_or_default,
};
use crate::geojson::{FeatureCollection, PointFeature};

/// The stations of one line, in published order.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDataset {
    id: LineId,
    display_name: String,
    stations: Vec<StationRecord>,
}

impl LineDataset {
    /// Create a dataset.
    ///
    /// When `display_name` is `None` it is derived from the line's layer id.
    pub fn new(id: LineId, display_name: Option<String>, stations: Vec<StationRecord>) -> Self {
        let display_name = display_name.unwrap_or_else(|| derive_display_name(&id.layer_id()));
        Self {
            id,
            display_name,
            stations,
        }
    }

    /// Build a dataset from a GeoJSON collection, rejecting unnamed stations.
    pub fn from_collection(
        id: LineId,
        display_name: Option<String>,
        collection: &FeatureCollection,
    ) -> Result<Self, DomainError> {
        let stations = collection
            .features
            .iter()
            .enumerate()
            .map(|(index, feature)| {
                if feature.name().trim().is_empty() {
                    return Err(DomainError::UnnamedStation {
                        line: id.to_string(),
                        index,
                    });
                }
                Ok(StationRecord::new(feature.name(), feature.coordinates()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(id, display_name, stations))
    }

    pub fn id(&self) -> &LineId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn stations(&self) -> &[StationRecord] {
        &self.stations
    }

    pub fn layer_id(&self) -> String {
        self.id.layer_id()
    }

    pub fn source_id(&self) -> String {
        self.id.source_id()
    }

    /// The line's published color, black when unknown.
    pub fn color(&self) -> &'static str {
        line_color_or_default(&self.display_name)
    }

    /// Find a station by exact name.
    pub fn find(&self, name: &str) -> Option<&StationRecord> {
        self.stations.iter().find(|s| s.name == name)
    }

    /// Find a station by case-insensitive key.
    pub fn find_key(&self, key: &StationKey) -> Option<&StationRecord> {
        self.stations.iter().find(|s| key.matches(&s.name))
    }

    /// GeoJSON form, used as the data of the line's map source.
    pub fn to_collection(&self) -> FeatureCollection {
        FeatureCollection::new(
            self.stations
                .iter()
                .map(|s| PointFeature::new(s.name.clone(), s.coordinates))
                .collect(),
        )
    }
}

/// All line datasets, plus the optional combined line-path geometry.
///
/// Read-only once built. Iteration order is the order the lines were
/// given in, and "first match" lookups follow it.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    lines: Vec<LineDataset>,
    paths: Option<Value>,
}

impl Gazetteer {
    /// Create a gazetteer, rejecting duplicate line ids.
    pub fn new(lines: Vec<LineDataset>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for line in &lines {
            if !seen.insert(line.id()) {
                return Err(DomainError::DuplicateLine(line.id().to_string()));
            }
        }
        Ok(Self { lines, paths: None })
    }

    /// Attach the combined line-path dataset (passed to the map as-is).
    pub fn with_paths(mut self, paths: Value) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn lines(&self) -> &[LineDataset] {
        &self.lines
    }

    pub fn paths(&self) -> Option<&Value> {
        self.paths.as_ref()
    }

    pub fn line(&self, id: &LineId) -> Option<&LineDataset> {
        self.lines.iter().find(|l| l.id() == id)
    }

    /// Every station record with its line, in gazetteer order.
    pub fn records(&self) -> impl Iterator<Item = (&LineDataset, &StationRecord)> {
        self.lines
            .iter()
            .flat_map(|line| line.stations().iter().map(move |s| (line, s)))
    }

    /// Number of station records across all lines (interchanges count once per line).
    pub fn record_count(&self) -> usize {
        self.lines.iter().map(|l| l.stations().len()).sum()
    }

    /// First record whose name matches `key`, in gazetteer order.
    pub fn find(&self, key: &StationKey) -> Option<(&LineDataset, &StationRecord)> {
        self.records().find(|(_, s)| key.matches(&s.name))
    }

    /// Lines with a station named exactly `name`.
    pub fn lines_serving<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = (&'a LineDataset, &'a StationRecord)> + 'a {
        self.lines
            .iter()
            .filter_map(move |line| line.find(name).map(|s| (line, s)))
    }
}
