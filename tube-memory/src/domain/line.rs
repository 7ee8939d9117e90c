//! Line identifiers and the set of tracked lines.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Suffix of the map layer that draws a line's station markers.
pub const STATION_LAYER_SUFFIX: &str = "-stations";

/// Suffix of the map source that holds a line's station features.
pub const LINE_SOURCE_SUFFIX: &str = "-line";

/// Error returned when parsing an invalid line identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line id {input:?}: {reason}")]
pub struct InvalidLineId {
    input: String,
    reason: &'static str,
}

/// Short identifier of a line, e.g. `piccadilly` or `waterloo`.
///
/// Lower-case ASCII letters, digits and single hyphens. Map layer and
/// source identifiers are derived from it.
///
/// # Examples
///
/// ```
/// use tube_memory::domain::LineId;
///
/// let id = LineId::parse("piccadilly").unwrap();
/// assert_eq!(id.layer_id(), "piccadilly-stations");
/// assert_eq!(id.source_id(), "piccadilly-line");
///
/// assert!(LineId::parse("Piccadilly").is_err());
/// assert!(LineId::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineId(String);

impl LineId {
    pub fn parse(s: &str) -> Result<Self, InvalidLineId> {
        let invalid = |reason| InvalidLineId {
            input: s.to_string(),
            reason,
        };

        if s.is_empty() {
            return Err(invalid("must not be empty"));
        }
        if !s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(invalid("must be lower-case ASCII letters, digits or '-'"));
        }
        if s.starts_with('-') || s.ends_with('-') || s.contains("--") {
            return Err(invalid("hyphens must separate words"));
        }

        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of the circle layer drawing this line's stations.
    pub fn layer_id(&self) -> String {
        format!("{}{}", self.0, STATION_LAYER_SUFFIX)
    }

    /// Id of the GeoJSON source holding this line's stations.
    pub fn source_id(&self) -> String {
        format!("{}{}", self.0, LINE_SOURCE_SUFFIX)
    }
}

impl TryFrom<String> for LineId {
    type Error = InvalidLineId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<LineId> for String {
    fn from(id: LineId) -> Self {
        id.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive a line's display name from its station layer id.
///
/// Strips the `-stations` suffix, turns hyphens into spaces and title-cases
/// the result: `hammersmith-stations` becomes `Hammersmith`. Title-casing
/// follows Gruber's rules, so small words such as "and" or "of" stay lower
/// case after the first word.
pub fn derive_display_name(layer_id: &str) -> String {
    let base = layer_id
        .strip_suffix(STATION_LAYER_SUFFIX)
        .unwrap_or(layer_id)
        .replace('-', " ");
    titlecase::titlecase(&base)
}

/// A line the game tracks, with its geodata file stem and published name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedLine {
    pub id: &'static str,
    pub display_name: &'static str,
}

/// The Underground lines whose stations count towards the score.
pub const TRACKED_LINES: [TrackedLine; 11] = [
    TrackedLine { id: "waterloo", display_name: "Waterloo & City" },
    TrackedLine { id: "piccadilly", display_name: "Piccadilly" },
    TrackedLine { id: "northern", display_name: "Northern" },
    TrackedLine { id: "metropolitan", display_name: "Metropolitan" },
    TrackedLine { id: "hammersmith", display_name: "Hammersmith & City" },
    TrackedLine { id: "district", display_name: "District" },
    TrackedLine { id: "circle", display_name: "Circle" },
    TrackedLine { id: "bakerloo", display_name: "Bakerloo" },
    TrackedLine { id: "central", display_name: "Central" },
    TrackedLine { id: "victoria", display_name: "Victoria" },
    TrackedLine { id: "jubilee", display_name: "Jubilee" },
];

impl TrackedLine {
    pub fn line_id(&self) -> Result<LineId, InvalidLineId> {
        LineId::parse(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert!(LineId::parse("central").is_ok());
        assert!(LineId::parse("waterloo-city").is_ok());
        assert!(LineId::parse("line2").is_ok());
    }

    #[test]
    fn parse_invalid() {
        assert!(LineId::parse("").is_err());
        assert!(LineId::parse("Central").is_err());
        assert!(LineId::parse("central line").is_err());
        assert!(LineId::parse("-central").is_err());
        assert!(LineId::parse("central-").is_err());
        assert!(LineId::parse("a--b").is_err());
    }

    #[test]
    fn derived_ids() {
        let id = LineId::parse("jubilee").unwrap();
        assert_eq!(id.layer_id(), "jubilee-stations");
        assert_eq!(id.source_id(), "jubilee-line");
    }

    #[test]
    fn display_name_from_layer_id() {
        assert_eq!(derive_display_name("central-stations"), "Central");
        assert_eq!(derive_display_name("hammersmith-stations"), "Hammersmith");
        assert_eq!(derive_display_name("london-overground-stations"), "London Overground");
    }

    #[test]
    fn display_name_keeps_small_words_lower() {
        assert_eq!(derive_display_name("city-and-south-stations"), "City and South");
        assert_eq!(derive_display_name("and-stations"), "And");
    }

    #[test]
    fn tracked_lines_are_valid_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for line in TRACKED_LINES {
            let id = line.line_id().unwrap();
            assert!(seen.insert(id), "duplicate line {}", line.id);
        }
        assert_eq!(seen.len(), 11);
    }

    #[test]
    fn serde_roundtrip_validates() {
        let id: LineId = serde_json::from_str("\"victoria\"").unwrap();
        assert_eq!(id.as_str(), "victoria");
        assert!(serde_json::from_str::<LineId>("\"Victoria Line\"").is_err());
    }
}
