//! HTTP client for remotely hosted geodata.

use futures::future::try_join_all;
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::TrackedLine;
use crate::geojson::FeatureCollection;

use super::bundle::{GeodataBundle, LineBundle};
use super::error::GazetteerError;
use super::loader::{PATHS_FILE, dataset_file_name, parse_line_id};

/// Configuration for the geodata client.
#[derive(Debug, Clone)]
pub struct GeodataClientConfig {
    /// Base URL the `{line}.geojson` files live under
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeodataClientConfig {
    /// Create a new config with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Client fetching line datasets over HTTP.
#[derive(Debug, Clone)]
pub struct GeodataClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeodataClient {
    /// Create a new geodata client.
    pub fn new(config: GeodataClientConfig) -> Result<Self, GazetteerError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    fn url(&self, file: &str) -> String {
        format!("{}/{}", self.base_url, file)
    }

    /// Fetch one line's station dataset.
    pub async fn fetch_line(&self, line: &TrackedLine) -> Result<LineBundle, GazetteerError> {
        let url = self.url(&dataset_file_name(line.id));
        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GazetteerError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let stations: FeatureCollection =
            serde_json::from_str(&body).map_err(|e| GazetteerError::Json {
                origin: url.clone(),
                message: e.to_string(),
            })?;

        debug!(line = line.id, stations = stations.len(), "fetched line dataset");

        Ok(LineBundle {
            id: parse_line_id(line)?,
            display_name: Some(line.display_name.to_string()),
            stations,
        })
    }

    /// Fetch the combined line paths. A 404 means the host has none.
    pub async fn fetch_paths(&self) -> Result<Option<Value>, GazetteerError> {
        let url = self.url(PATHS_FILE);
        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GazetteerError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let paths = serde_json::from_str(&body).map_err(|e| GazetteerError::Json {
            origin: url,
            message: e.to_string(),
        })?;
        Ok(Some(paths))
    }

    /// Fetch every line concurrently, plus the paths.
    pub async fn fetch_bundle(&self, lines: &[TrackedLine]) -> Result<GeodataBundle, GazetteerError> {
        let (lines, paths) = futures::try_join!(
            try_join_all(lines.iter().map(|line| self.fetch_line(line))),
            self.fetch_paths()
        )?;

        info!(base_url = %self.base_url, lines = lines.len(), "fetched geodata");
        Ok(GeodataBundle { lines, paths })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = GeodataClientConfig::new("https://example.org/geodata");
        assert_eq!(config.base_url, "https://example.org/geodata");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_strips_trailing_slash() {
        let config = GeodataClientConfig::new("http://localhost:8080/").with_timeout_secs(5);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn urls() {
        let client = GeodataClient::new(GeodataClientConfig::new("http://localhost:8080/data")).unwrap();
        assert_eq!(client.url("central.geojson"), "http://localhost:8080/data/central.geojson");
        assert_eq!(client.url(PATHS_FILE), "http://localhost:8080/data/tube-lines.geojson");
    }
}
