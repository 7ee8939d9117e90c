//! WASM bridge for the tube memory game.
//!
//! The page creates the MapLibre map and hands it, with the inlined geodata
//! bundle, to [`TubeMemory`]. From then on the game drives the map, the
//! input field and the score through the bridge.

pub mod dom;
pub mod js_map;
pub mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, JSON};
use tube_memory::gazetteer::{GazetteerError, GeodataBundle};
use tube_memory::progress::StorageError;
use tube_memory::{Game, GameConfig, InputFeedback};
use wasm_bindgen::prelude::*;
use web_sys::{Event, KeyboardEvent};

use dom::Page;
use js_map::JsMap;
use storage::LocalStorage;

type SharedGame = Rc<RefCell<Game<JsMap, LocalStorage>>>;

/// Errors setting up the bridge.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("bad geodata: {0}")]
    Geodata(#[from] GazetteerError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("page error: {0}")]
    Page(String),
}

impl From<BridgeError> for JsValue {
    fn from(e: BridgeError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

fn page_error(e: JsValue) -> BridgeError {
    BridgeError::Page(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// A running game attached to a map and the page.
#[wasm_bindgen]
pub struct TubeMemory {
    game: SharedGame,
    page: Page,
    _on_load: Closure<dyn FnMut()>,
    _on_input: Closure<dyn FnMut(Event)>,
    _on_keydown: Closure<dyn FnMut(KeyboardEvent)>,
}

#[wasm_bindgen]
impl TubeMemory {
    /// Start a game on `map` with the geodata bundle `geodata`.
    ///
    /// `storage_key` and `total_stations` override the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        map: JsValue,
        geodata: JsValue,
        storage_key: Option<String>,
        total_stations: Option<u32>,
    ) -> Result<TubeMemory, JsValue> {
        let json = JSON::stringify(&geodata)?
            .as_string()
            .ok_or_else(|| BridgeError::Page("geodata is not JSON".to_string()))?;
        let gazetteer = GeodataBundle::from_json(&json)
            .map_err(BridgeError::from)?
            .into_gazetteer()
            .map_err(|e| BridgeError::Geodata(e.into()))?;

        let mut config = GameConfig::default();
        if let Some(key) = storage_key.filter(|k| !k.is_empty()) {
            config = config.with_storage_key(key);
        }
        if let Some(total) = total_stations.filter(|&t| t > 0) {
            config = config.with_total_stations(total as usize);
        }

        let map = JsMap::new(map);
        let storage = LocalStorage::open().map_err(BridgeError::from)?;
        let page = Page::find().map_err(page_error)?;
        let already_loaded = map.is_loaded();

        let game: SharedGame = Rc::new(RefCell::new(Game::new(
            gazetteer.into(),
            map,
            storage,
            config,
        )));
        page.set_score(game.borrow().score());

        let on_load = {
            let game = Rc::clone(&game);
            let page = page.clone();
            Closure::<dyn FnMut()>::new(move || {
                let mut game = game.borrow_mut();
                game.on_map_ready();
                page.set_score(game.score());
            })
        };
        game.borrow()
            .map()
            .on("load", on_load.as_ref().unchecked_ref())
            .map_err(|e| BridgeError::Page(e.to_string()))?;

        let on_input = {
            let game = Rc::clone(&game);
            let page = page.clone();
            Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                let value = page.input.value();
                let cursor = page
                    .input
                    .selection_start()
                    .ok()
                    .flatten()
                    .map_or(value.encode_utf16().count(), |c| c as usize);
                let (upper, caret) = game.borrow_mut().on_input(&value, cursor);
                if upper != value {
                    page.set_value(&upper, Some(caret));
                }
            })
        };
        page.input
            .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;

        let on_keydown = {
            let game = Rc::clone(&game);
            let page = page.clone();
            Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                // Pick up anything typed without an input event (autofill)
                let mut game = game.borrow_mut();
                let value = page.input.value();
                game.on_input(&value, value.encode_utf16().count());
                if let Some(feedback) = game.on_key(&event.key()) {
                    show_feedback(&page, &feedback);
                }
            })
        };
        page.input
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;

        if already_loaded {
            let mut game = game.borrow_mut();
            game.on_map_ready();
            page.set_score(game.score());
        }

        tracing::info!(
            lines = game.borrow().gazetteer().lines().len(),
            discovered = game.borrow().discovered().len(),
            "tube memory started"
        );

        Ok(TubeMemory {
            game,
            page,
            _on_load: on_load,
            _on_input: on_input,
            _on_keydown: on_keydown,
        })
    }

    /// Check `name` as if it had been typed and submitted.
    pub fn guess(&self, name: &str) -> bool {
        let feedback = self.game.borrow_mut().validate(name);
        show_feedback(&self.page, &feedback);
        feedback.outcome.is_valid()
    }

    /// Score text, e.g. `"12/269"`.
    pub fn score(&self) -> String {
        self.game.borrow().score().to_string()
    }

    /// Names found so far, in the order they were found.
    pub fn discovered(&self) -> Array {
        self.game
            .borrow()
            .discovered()
            .names()
            .iter()
            .map(|name| JsValue::from_str(name))
            .collect()
    }
}

fn show_feedback(page: &Page, feedback: &InputFeedback) {
    page.set_value(&feedback.field_value, None);
    page.set_style(feedback.style);
    page.set_score(feedback.score);
}
