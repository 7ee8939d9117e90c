//! Application state for the web layer.

use std::sync::Arc;

use crate::config::GameConfig;
use crate::gazetteer::{Gazetteer, GazetteerError, GeodataBundle};

/// Shared application state.
///
/// Read-only: the server keeps no game state, it only hands out geodata.
#[derive(Clone)]
pub struct AppState {
    /// Loaded station geodata
    pub gazetteer: Arc<Gazetteer>,

    /// The gazetteer as bundle JSON, serialized once at startup
    pub bundle_json: Arc<str>,

    /// Settings passed to the page
    pub config: Arc<GameConfig>,
}

impl AppState {
    /// Create a new app state, serializing the geodata bundle.
    pub fn new(gazetteer: Gazetteer, config: GameConfig) -> Result<Self, GazetteerError> {
        let bundle_json = GeodataBundle::from_gazetteer(&gazetteer).to_json()?;
        Ok(Self {
            gazetteer: Arc::new(gazetteer),
            bundle_json: bundle_json.into(),
            config: Arc::new(config),
        })
    }
}
