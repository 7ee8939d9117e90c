//! Load geodata from a directory of GeoJSON files.
//!
//! Expects one `{line}.geojson` per tracked line and, optionally,
//! `tube-lines.geojson` with the combined line paths.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::domain::{LineId, TrackedLine};
use crate::geojson::FeatureCollection;

use super::bundle::{GeodataBundle, LineBundle};
use super::error::GazetteerError;
use super::Gazetteer;

/// File holding the combined line-path geometry.
pub const PATHS_FILE: &str = "tube-lines.geojson";

/// File name of a line's station dataset.
pub fn dataset_file_name(line_id: &str) -> String {
    format!("{line_id}.geojson")
}

/// Read a bundle from `dir` for the given lines.
///
/// Every line file must exist. The paths file is optional.
pub fn load_bundle(dir: impl AsRef<Path>, lines: &[TrackedLine]) -> Result<GeodataBundle, GazetteerError> {
    let dir = dir.as_ref();

    let lines = lines
        .iter()
        .map(|line| {
            let path = dir.join(dataset_file_name(line.id));
            let stations: FeatureCollection = read_json(&path)?;
            debug!(line = line.id, stations = stations.len(), "loaded line dataset");
            Ok(LineBundle {
                id: parse_line_id(line)?,
                display_name: Some(line.display_name.to_string()),
                stations,
            })
        })
        .collect::<Result<Vec<_>, GazetteerError>>()?;

    let paths_path = dir.join(PATHS_FILE);
    let paths = if paths_path.is_file() {
        Some(read_json::<Value>(&paths_path)?)
    } else {
        debug!(path = %paths_path.display(), "no line paths file");
        None
    };

    Ok(GeodataBundle { lines, paths })
}

/// Load a gazetteer from `dir` for the given lines.
pub fn load_dir(dir: impl AsRef<Path>, lines: &[TrackedLine]) -> Result<Gazetteer, GazetteerError> {
    let dir = dir.as_ref();
    let gazetteer = load_bundle(dir, lines)?.into_gazetteer()?;
    info!(
        dir = %dir.display(),
        lines = gazetteer.lines().len(),
        records = gazetteer.record_count(),
        "loaded geodata"
    );
    Ok(gazetteer)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, GazetteerError> {
    let contents = std::fs::read_to_string(path).map_err(|e| GazetteerError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&contents).map_err(|e| GazetteerError::Json {
        origin: path.display().to_string(),
        message: e.to_string(),
    })
}

/// A tracked line's id, reporting failures as a gazetteer error.
pub(crate) fn parse_line_id(line: &TrackedLine) -> Result<LineId, GazetteerError> {
    line.line_id().map_err(|e| GazetteerError::Domain(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationKey;
    use serde_json::json;
    use tempfile::tempdir;

    const LINES: [TrackedLine; 2] = [
        TrackedLine { id: "central", display_name: "Central" },
        TrackedLine { id: "waterloo", display_name: "Waterloo & City" },
    ];

    fn station(name: &str, lon: f64, lat: f64) -> Value {
        json!({
            "type": "Feature",
            "properties": { "name": name },
            "geometry": { "type": "Point", "coordinates": [lon, lat] }
        })
    }

    fn write(dir: &Path, file: &str, value: Value) {
        std::fs::write(dir.join(file), value.to_string()).unwrap();
    }

    #[test]
    fn loads_lines_and_paths() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "central.geojson",
            json!({ "type": "FeatureCollection", "features": [station("Bank", -0.0886, 51.5133)] }),
        );
        write(
            dir.path(),
            "waterloo.geojson",
            json!({ "type": "FeatureCollection", "features": [
                station("Waterloo", -0.1133, 51.5036),
                station("Bank", -0.0886, 51.5133),
            ] }),
        );
        write(dir.path(), PATHS_FILE, json!({ "type": "FeatureCollection", "features": [] }));

        let gazetteer = load_dir(dir.path(), &LINES).unwrap();
        assert_eq!(gazetteer.lines().len(), 2);
        assert_eq!(gazetteer.record_count(), 3);
        assert_eq!(gazetteer.lines()[1].display_name(), "Waterloo & City");
        assert!(gazetteer.paths().is_some());
        assert!(gazetteer.find(&StationKey::new("waterloo")).is_some());
    }

    #[test]
    fn paths_are_optional() {
        let dir = tempdir().unwrap();
        let empty = json!({ "type": "FeatureCollection", "features": [] });
        write(dir.path(), "central.geojson", empty.clone());
        write(dir.path(), "waterloo.geojson", empty);

        let gazetteer = load_dir(dir.path(), &LINES).unwrap();
        assert!(gazetteer.paths().is_none());
    }

    #[test]
    fn missing_line_file_is_an_error() {
        let dir = tempdir().unwrap();
        write(dir.path(), "central.geojson", json!({ "type": "FeatureCollection", "features": [] }));

        let err = load_dir(dir.path(), &LINES).unwrap_err();
        assert!(matches!(err, GazetteerError::Io { ref path, .. } if path.ends_with("waterloo.geojson")));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("central.geojson"), "{ not json").unwrap();

        let err = load_dir(dir.path(), &LINES).unwrap_err();
        assert!(matches!(err, GazetteerError::Json { .. }));
    }

    #[test]
    fn file_names() {
        assert_eq!(dataset_file_name("jubilee"), "jubilee.geojson");
    }
}
