//! Tube memory game.
//!
//! Type London Underground station names to find them on the map. Found
//! stations get a label and turn their line's color; progress is saved
//! locally and the score counts up towards every station on the network.
//!
//! The crate holds the game core, which is independent of any browser or
//! map library and builds for `wasm32`, plus (behind the default `server`
//! feature) the page server and the geodata fetcher.

pub mod config;
pub mod discovery;
pub mod domain;
pub mod game;
pub mod gazetteer;
pub mod geojson;
pub mod labels;
pub mod map;
pub mod progress;
pub mod recolor;
pub mod score;
pub mod validate;
#[cfg(feature = "server")]
pub mod web;

#[cfg(test)]
mod test_fixtures;

pub use config::GameConfig;
pub use game::{Game, InputFeedback};
