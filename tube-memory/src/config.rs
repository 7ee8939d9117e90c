//! Game and server configuration.

use crate::domain::Coordinates;
use crate::map::Camera;
use crate::progress::DEFAULT_STORAGE_KEY;
use crate::score::TOTAL_STATIONS;

/// Map style the game is drawn on.
pub const DEFAULT_STYLE_URL: &str = "https://mapsmania.github.io/tubememory/tubememorystyle.json";

/// Configuration for one game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Storage key progress is saved under.
    pub storage_key: String,

    /// Denominator of the score.
    pub total_stations: usize,

    /// Zoom used when flying to a found station.
    pub fly_to_zoom: f64,

    /// Where the map starts.
    pub initial_camera: Camera,

    /// MapLibre style JSON.
    pub style_url: String,
}

impl GameConfig {
    /// Store progress under a different key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_total_stations(mut self, total: usize) -> Self {
        self.total_stations = total;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            total_stations: TOTAL_STATIONS,
            fly_to_zoom: 15.0,
            initial_camera: Camera {
                center: Coordinates::LONDON,
                zoom: 11.0,
            },
            style_url: DEFAULT_STYLE_URL.to_string(),
        }
    }
}

#[cfg(feature = "server")]
pub use server::ServerConfig;

#[cfg(feature = "server")]
mod server {
    use std::net::SocketAddr;
    use std::path::PathBuf;

    use tracing::warn;

    const DEFAULT_ADDR: SocketAddr = SocketAddr::new(
        std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
        3000,
    );

    /// Page server settings, read from `TUBE_MEMORY_*` environment variables.
    #[derive(Debug, Clone, PartialEq)]
    pub struct ServerConfig {
        /// Address to listen on.
        pub addr: SocketAddr,

        /// Directory holding `{line}.geojson` files.
        pub data_dir: PathBuf,

        /// Remote base URL to fetch geodata from instead of `data_dir`.
        pub geodata_url: Option<String>,

        /// Cache file for remote geodata.
        pub cache_path: PathBuf,

        /// Directory served under `/static`.
        pub static_dir: PathBuf,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                addr: DEFAULT_ADDR,
                data_dir: PathBuf::from("data"),
                geodata_url: None,
                cache_path: PathBuf::from("geodata_cache.json"),
                static_dir: PathBuf::from("static"),
            }
        }
    }

    impl ServerConfig {
        /// Read from the process environment.
        pub fn from_env() -> Self {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        /// Read from any variable lookup. Unset or unparseable values fall
        /// back to the defaults.
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
            let defaults = Self::default();

            let addr = match lookup("TUBE_MEMORY_ADDR") {
                Some(raw) => raw.parse().unwrap_or_else(|e| {
                    warn!(value = %raw, error = %e, "invalid TUBE_MEMORY_ADDR, using default");
                    defaults.addr
                }),
                None => defaults.addr,
            };

            Self {
                addr,
                data_dir: lookup("TUBE_MEMORY_DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.data_dir),
                geodata_url: lookup("TUBE_MEMORY_GEODATA_URL").filter(|url| !url.trim().is_empty()),
                cache_path: lookup("TUBE_MEMORY_CACHE")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.cache_path),
                static_dir: lookup("TUBE_MEMORY_STATIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.static_dir),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn config(vars: &[(&str, &str)]) -> ServerConfig {
            let vars: HashMap<String, String> = vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            ServerConfig::from_lookup(|key| vars.get(key).cloned())
        }

        #[test]
        fn defaults_when_unset() {
            let config = config(&[]);
            assert_eq!(config, ServerConfig::default());
            assert_eq!(config.addr.to_string(), "127.0.0.1:3000");
        }

        #[test]
        fn reads_all_variables() {
            let config = config(&[
                ("TUBE_MEMORY_ADDR", "0.0.0.0:8080"),
                ("TUBE_MEMORY_DATA_DIR", "/srv/geodata"),
                ("TUBE_MEMORY_GEODATA_URL", "https://example.com/data"),
                ("TUBE_MEMORY_CACHE", "/tmp/cache.json"),
                ("TUBE_MEMORY_STATIC_DIR", "/srv/static"),
            ]);
            assert_eq!(config.addr.to_string(), "0.0.0.0:8080");
            assert_eq!(config.data_dir, PathBuf::from("/srv/geodata"));
            assert_eq!(config.geodata_url.as_deref(), Some("https://example.com/data"));
            assert_eq!(config.cache_path, PathBuf::from("/tmp/cache.json"));
            assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
        }

        #[test]
        fn bad_addr_falls_back() {
            let config = config(&[("TUBE_MEMORY_ADDR", "not an address")]);
            assert_eq!(config.addr, DEFAULT_ADDR);
        }

        #[test]
        fn blank_url_is_unset() {
            let config = config(&[("TUBE_MEMORY_GEODATA_URL", "  ")]);
            assert!(config.geodata_url.is_none());
        }
    }
}
