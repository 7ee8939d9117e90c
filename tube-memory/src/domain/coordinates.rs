//! Geographic coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when constructing out-of-range coordinates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinates: {reason}")]
pub struct InvalidCoordinates {
    reason: &'static str,
}

/// A WGS84 position in GeoJSON axis order (longitude, latitude).
///
/// Longitude is within [-180, 180] and latitude within [-90, 90]. Both are
/// finite. Any `Coordinates` value satisfies this by construction, including
/// values deserialized from a GeoJSON position. A position's altitude, if
/// present, is dropped.
///
/// # Examples
///
/// ```
/// use tube_memory::domain::Coordinates;
///
/// let oxford_circus = Coordinates::new(-0.1415, 51.5152).unwrap();
/// assert_eq!(oxford_circus.lon(), -0.1415);
///
/// // Latitude out of range
/// assert!(Coordinates::new(0.0, 91.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct Coordinates {
    lon: f64,
    lat: f64,
}

impl Coordinates {
    /// Central London, where the map opens.
    pub const LONDON: Coordinates = Coordinates {
        lon: -0.124819,
        lat: 51.508328,
    };

    /// Build coordinates from a longitude and latitude.
    pub fn new(lon: f64, lat: f64) -> Result<Self, InvalidCoordinates> {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(InvalidCoordinates {
                reason: "must be finite numbers",
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidCoordinates {
                reason: "longitude must be within [-180, 180]",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinates {
                reason: "latitude must be within [-90, 90]",
            });
        }
        Ok(Self { lon, lat })
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// The GeoJSON `[lon, lat]` pair.
    pub fn to_array(self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl TryFrom<Vec<f64>> for Coordinates {
    type Error = InvalidCoordinates;

    fn try_from(position: Vec<f64>) -> Result<Self, Self::Error> {
        match position.as_slice() {
            [lon, lat, ..] => Self::new(*lon, *lat),
            _ => Err(InvalidCoordinates {
                reason: "position needs a longitude and a latitude",
            }),
        }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        c.to_array()
    }
}

impl fmt::Debug for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinates({}, {})", self.lon, self.lat)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lon, self.lat)
    }
}
