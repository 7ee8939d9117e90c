//! Small London gazetteer shared by unit tests.

use serde_json::json;

use crate::domain::{Coordinates, LineId, StationRecord};
use crate::gazetteer::{Gazetteer, LineDataset};

pub const OXFORD_CIRCUS: (f64, f64) = (-0.1415, 51.5152);
pub const BANK: (f64, f64) = (-0.0886, 51.5133);
pub const BAKER_STREET: (f64, f64) = (-0.1571, 51.5226);
pub const WATERLOO: (f64, f64) = (-0.1133, 51.5036);
pub const GREEN_PARK: (f64, f64) = (-0.1428, 51.5067);
pub const STRATFORD: (f64, f64) = (-0.0035, 51.5416);
pub const LIVERPOOL_STREET: (f64, f64) = (-0.0823, 51.5178);
pub const BRIXTON: (f64, f64) = (-0.1146, 51.4627);
pub const EUSTON: (f64, f64) = (-0.1337, 51.5282);

pub fn coords((lon, lat): (f64, f64)) -> Coordinates {
    Coordinates::new(lon, lat).unwrap()
}

fn dataset(id: &str, name: &str, stations: &[(&str, (f64, f64))]) -> LineDataset {
    LineDataset::new(
        LineId::parse(id).unwrap(),
        Some(name.to_string()),
        stations
            .iter()
            .map(|(n, c)| StationRecord::new(*n, coords(*c)))
            .collect(),
    )
}

/// Six lines, nine distinct stations, several interchanges.
pub fn london() -> Gazetteer {
    Gazetteer::new(vec![
        dataset(
            "central",
            "Central",
            &[
                ("Oxford Circus", OXFORD_CIRCUS),
                ("Bank", BANK),
                ("Liverpool Street", LIVERPOOL_STREET),
                ("Stratford", STRATFORD),
            ],
        ),
        dataset(
            "bakerloo",
            "Bakerloo",
            &[
                ("Baker Street", BAKER_STREET),
                ("Oxford Circus", OXFORD_CIRCUS),
                ("Waterloo", WATERLOO),
            ],
        ),
        dataset(
            "victoria",
            "Victoria",
            &[
                ("Oxford Circus", OXFORD_CIRCUS),
                ("Green Park", GREEN_PARK),
                ("Brixton", BRIXTON),
            ],
        ),
        dataset(
            "northern",
            "Northern",
            &[("Euston", EUSTON), ("Bank", BANK), ("Waterloo", WATERLOO)],
        ),
        dataset(
            "waterloo",
            "Waterloo & City",
            &[("Waterloo", WATERLOO), ("Bank", BANK)],
        ),
        dataset(
            "jubilee",
            "Jubilee",
            &[
                ("Baker Street", BAKER_STREET),
                ("Green Park", GREEN_PARK),
                ("Waterloo", WATERLOO),
                ("Stratford", STRATFORD),
            ],
        ),
    ])
    .unwrap()
    .with_paths(json!({ "type": "FeatureCollection", "features": [] }))
}

/// Distinct station names in [`london`].
pub const LONDON_STATIONS: [&str; 9] = [
    "Oxford Circus",
    "Bank",
    "Liverpool Street",
    "Stratford",
    "Baker Street",
    "Waterloo",
    "Green Park",
    "Brixton",
    "Euston",
];
