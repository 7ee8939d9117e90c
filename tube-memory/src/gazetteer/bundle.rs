//! Serialized form of a whole gazetteer.
//!
//! The page server inlines this JSON into the game page, the wasm bridge
//! parses it back, and the remote-fetch cache stores it on disk.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{DomainError, LineId};
use crate::geojson::FeatureCollection;

use super::error::GazetteerError;
use super::{Gazetteer, LineDataset};

/// One line's stations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineBundle {
    pub id: LineId,
    /// Published name; derived from the id when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub stations: FeatureCollection,
}

/// Every line plus the optional combined line paths.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeodataBundle {
    pub lines: Vec<LineBundle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<Value>,
}

impl GeodataBundle {
    /// Parse a bundle from JSON text.
    pub fn from_json(json: &str) -> Result<Self, GazetteerError> {
        serde_json::from_str(json).map_err(|e| GazetteerError::Json {
            origin: "geodata bundle".to_string(),
            message: e.to_string(),
        })
    }

    pub fn to_json(&self) -> Result<String, GazetteerError> {
        serde_json::to_string(self).map_err(|e| GazetteerError::Json {
            origin: "geodata bundle".to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_gazetteer(gazetteer: &Gazetteer) -> Self {
        Self {
            lines: gazetteer
                .lines()
                .iter()
                .map(|line| LineBundle {
                    id: line.id().clone(),
                    display_name: Some(line.display_name().to_string()),
                    stations: line.to_collection(),
                })
                .collect(),
            paths: gazetteer.paths().cloned(),
        }
    }

    pub fn into_gazetteer(self) -> Result<Gazetteer, DomainError> {
        let lines = self
            .lines
            .into_iter()
            .map(|line| LineDataset::from_collection(line.id, line.display_name, &line.stations))
            .collect::<Result<Vec<_>, _>>()?;

        let gazetteer = Gazetteer::new(lines)?;
        Ok(match self.paths {
            Some(paths) => gazetteer.with_paths(paths),
            None => gazetteer,
        })
    }
}
