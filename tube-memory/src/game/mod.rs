//! The game controller.
//!
//! A [`Game`] owns everything one player session needs: the station index,
//! the discovered set, the label layer, the recolor engine, the progress
//! store and the map handle. It is driven by three events: the map becoming
//! ready, the player typing, and the player pressing a key. Several games
//! can run side by side; nothing is global.
//!
//! Map effects wait for the map. Stations found before it is ready are
//! still recorded and saved, and get their label and colors when
//! [`Game::on_map_ready`] runs.


use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::discovery::DiscoverySet;
use crate::domain::{Coordinates, StationKey};
use crate::gazetteer::{DiscoveryIndex, Gazetteer};
use crate::labels::LabelLayer;
use crate::map::{Camera, MapWidget, install_network};
use crate::progress::{KeyValueStore, ProgressStore};
use crate::recolor::RecolorEngine;
use crate::score::Score;
use crate::validate::{FieldStyle, InputValidator, ValidationOutcome, uppercase_live};

/// What the page should show after a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct InputFeedback {
    pub outcome: ValidationOutcome,
    pub style: FieldStyle,
    /// New contents of the input field.
    pub field_value: String,
    pub score: Score,
    /// Published name of the station found, when it wasn't found before.
    pub discovered: Option<String>,
}

/// One player's game.
pub struct Game<M, S> {
    config: GameConfig,
    gazetteer: Arc<Gazetteer>,
    validator: InputValidator,
    discovered: DiscoverySet,
    labels: LabelLayer,
    recolor: RecolorEngine,
    progress: ProgressStore<S>,
    map: M,
    map_ready: bool,
    field: String,
    style: FieldStyle,
}

impl<M: MapWidget, S: KeyValueStore> Game<M, S> {
    /// Start a game, picking up any progress saved in `storage`.
    pub fn new(gazetteer: Arc<Gazetteer>, map: M, storage: S, config: GameConfig) -> Self {
        let index = Arc::new(DiscoveryIndex::build(&gazetteer));
        debug!(stations = index.len(), lines = gazetteer.lines().len(), "built station index");

        let progress = ProgressStore::with_key(storage, config.storage_key.clone());
        let mut game = Self {
            config,
            gazetteer,
            validator: InputValidator::new(index),
            discovered: DiscoverySet::new(),
            labels: LabelLayer::new(),
            recolor: RecolorEngine::new(),
            progress,
            map,
            map_ready: false,
            field: String::new(),
            style: FieldStyle::Neutral,
        };
        game.restore();
        game
    }

    /// The map has loaded: add the network layers and show saved progress.
    ///
    /// Calling it again does nothing.
    pub fn on_map_ready(&mut self) {
        if self.map_ready {
            return;
        }

        let layers = install_network(&mut self.map, &self.gazetteer);
        self.map_ready = true;

        self.restore();
        info!(layers, discovered = self.discovered.len(), "map ready");
    }

    /// Merge saved progress into the game.
    ///
    /// Saved names are matched case-insensitively against the gazetteer;
    /// names it doesn't know are dropped. When the map is ready every
    /// discovered station gets its label and colors. If the saved list
    /// wasn't already exactly the discovered set (duplicates, unknown names,
    /// other casing), the cleaned-up list is written back once.
    ///
    /// Returns the number of stations newly added.
    pub fn restore(&mut self) -> usize {
        let saved = self.progress.restore();

        let mut added = 0;
        for name in &saved {
            let Some(key) = StationKey::parse(name) else {
                continue;
            };
            match self.gazetteer.find(&key) {
                Some((_, record)) => {
                    if self.discovered.insert(&record.name) {
                        added += 1;
                    }
                }
                None => debug!(name = %name, "saved station not in gazetteer, skipping"),
            }
        }

        if self.map_ready {
            self.replay_effects();
        }

        if saved.as_slice() != self.discovered.names() {
            self.persist();
        }

        if added > 0 {
            info!(added, total = self.discovered.len(), "restored progress");
        }
        added
    }

    /// Record the gazetteer station `key` names and, once the map is ready,
    /// label and color it.
    ///
    /// Names the gazetteer doesn't know are ignored. Returns the published
    /// name when the station is new; progress is saved after every new
    /// discovery.
    fn discover(&mut self, key: &StationKey) -> Option<String> {
        let (_, record) = self.gazetteer.find(key)?;
        let (name, coordinates) = (record.name.clone(), record.coordinates);
        let is_new = self.discovered.insert(&name);

        if self.map_ready {
            self.apply_effects(&name, coordinates);
        }

        if !is_new {
            return None;
        }
        info!(station = %name, score = %self.score(), "station discovered");
        self.persist();
        Some(name)
    }

    /// Live-uppercase the field as the player types.
    ///
    /// Returns the new field value and caret position.
    pub fn on_input(&mut self, value: &str, cursor: usize) -> (String, usize) {
        let (upper, caret) = uppercase_live(value, cursor);
        self.field.clone_from(&upper);
        (upper, caret)
    }

    /// Handle a key press in the field. Only Enter does anything.
    pub fn on_key(&mut self, key: &str) -> Option<InputFeedback> {
        (key == "Enter").then(|| self.submit())
    }

    /// Validate whatever is in the field.
    pub fn submit(&mut self) -> InputFeedback {
        let raw = self.field.clone();
        self.validate(&raw)
    }

    /// Check `raw` and act on it.
    ///
    /// Blank input resets the field style and looks nothing up. An unknown
    /// name shows the failure style and changes nothing else. A known name
    /// flies the camera to the first station with that name, outlines it,
    /// discovers it, and clears both the field and its style.
    pub fn validate(&mut self, raw: &str) -> InputFeedback {
        let outcome = self.validator.validate(raw);
        let mut discovered = None;
        let mut field_value = raw.to_string();

        let found = match &outcome {
            ValidationOutcome::Match(key) => self
                .gazetteer
                .find(key)
                .map(|(_, record)| (key.clone(), record.name.clone(), record.coordinates)),
            _ => None,
        };

        let mut style = outcome.style();
        if let Some((key, name, coordinates)) = found {
            if self.map_ready {
                self.map.fly_to(Camera {
                    center: coordinates,
                    zoom: self.config.fly_to_zoom,
                });
                self.recolor.flash(&mut self.map, &self.gazetteer, &name);
            }
            discovered = self.discover(&key);
            field_value.clear();
            style = FieldStyle::Neutral;
        } else if outcome.is_valid() {
            warn!(input = %outcome.normalized(), "indexed station has no record");
        } else if let ValidationOutcome::NoMatch(key) = &outcome {
            debug!(input = %key, "not a station");
        }

        self.style = style;
        self.field.clone_from(&field_value);

        InputFeedback {
            outcome,
            style,
            field_value,
            score: self.score(),
            discovered,
        }
    }

    pub fn score(&self) -> Score {
        Score::new(self.discovered.len(), self.config.total_stations)
    }

    pub fn discovered(&self) -> &DiscoverySet {
        &self.discovered
    }

    pub fn labels(&self) -> &LabelLayer {
        &self.labels
    }

    pub fn recolor(&self) -> &RecolorEngine {
        &self.recolor
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    pub fn is_map_ready(&self) -> bool {
        self.map_ready
    }

    /// Current contents of the input field.
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn style(&self) -> FieldStyle {
        self.style
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    pub fn progress(&self) -> &ProgressStore<S> {
        &self.progress
    }

    fn apply_effects(&mut self, name: &str, coordinates: Coordinates) {
        if let Err(e) = self.labels.add_label(&mut self.map, name, coordinates) {
            warn!(station = name, error = %e, "failed to add station label");
        }
        self.recolor
            .highlight_discovered(&mut self.map, &self.gazetteer, name);
    }

    fn replay_effects(&mut self) {
        let gazetteer = Arc::clone(&self.gazetteer);
        for name in self.discovered.names().to_vec() {
            match gazetteer.find(&StationKey::new(&name)) {
                Some((_, record)) => self.apply_effects(&record.name, record.coordinates),
                None => debug!(station = %name, "no record to replay"),
            }
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.progress.persist(&self.discovered) {
            warn!(error = %e, "failed to save progress");
        }
    }
}
