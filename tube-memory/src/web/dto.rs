//! Data transfer objects for web responses.

use serde::Serialize;

use crate::gazetteer::LineDataset;

/// One line in the `/api/lines` listing.
#[derive(Debug, Serialize)]
pub struct LineSummary {
    /// Line id, e.g. "waterloo"
    pub id: String,

    /// Published name, e.g. "Waterloo & City"
    pub display_name: String,

    /// Line color as a hex string
    pub color: String,

    /// Id of the line's station marker layer
    pub layer_id: String,

    /// Number of stations on the line
    pub stations: usize,
}

impl LineSummary {
    pub fn from_dataset(line: &LineDataset) -> Self {
        Self {
            id: line.id().to_string(),
            display_name: line.display_name().to_string(),
            color: line.color().to_string(),
            layer_id: line.layer_id(),
            stations: line.stations().len(),
        }
    }
}

/// Response listing every line.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineSummary>,
    /// Distinct station names across all lines
    pub distinct_stations: usize,
    /// Denominator of the score
    pub total_stations: usize,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
