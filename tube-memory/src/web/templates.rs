//! Askama templates for the game page.

use askama::Template;

use crate::config::GameConfig;

/// The game page: map container, name input, score and inlined geodata.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Geodata bundle JSON, safe to place inside a `<script>` element
    pub geodata_json: String,
    pub style_url: String,
    pub center_lon: f64,
    pub center_lat: f64,
    pub zoom: f64,
    pub storage_key: String,
    pub total_stations: usize,
}

impl IndexTemplate {
    pub fn new(bundle_json: &str, config: &GameConfig) -> Self {
        Self {
            geodata_json: script_safe(bundle_json),
            style_url: config.style_url.clone(),
            center_lon: config.initial_camera.center.lon(),
            center_lat: config.initial_camera.center.lat(),
            zoom: config.initial_camera.zoom,
            storage_key: config.storage_key.clone(),
            total_stations: config.total_stations,
        }
    }
}

/// Escape JSON for embedding in an HTML `<script>` element.
///
/// `</script>` and `<!--` inside string values would otherwise end or
/// confuse the element. JSON parsers read `\u003c` back as `<`.
fn script_safe(json: &str) -> String {
    json.replace('<', "\\u003c")
}
