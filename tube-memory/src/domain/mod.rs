//! Domain types for the station discovery game.
//!
//! These types represent validated geodata. All types enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod color;
mod coordinates;
mod error;
mod line;
mod station;

pub use color::{DEFAULT_LINE_COLOR, LINE_COLORS, line_color, line_color_or_default};
pub use coordinates::{Coordinates, InvalidCoordinates};
pub use error::DomainError;
pub use line::{
    InvalidLineId, LINE_SOURCE_SUFFIX, LineId, STATION_LAYER_SUFFIX, TRACKED_LINES, TrackedLine,
    derive_display_name,
};
pub use station::{StationKey, StationRecord};
