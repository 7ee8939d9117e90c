//! On-disk copy of geodata fetched from a remote host.
//!
//! One file holds one bundle, tagged with the base URL it came from and the
//! time it was written. A stale, foreign or unreadable file is a miss.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use super::bundle::GeodataBundle;
use super::error::GazetteerError;

const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Serialize)]
struct EntryRef<'a> {
    cached_at_secs: u64,
    source: &'a str,
    bundle: &'a GeodataBundle,
}

#[derive(Deserialize)]
struct Entry {
    cached_at_secs: u64,
    source: String,
    bundle: GeodataBundle,
}

fn unix_now() -> Option<u64> {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .ok()
        .map(|d| d.as_secs())
}

fn cache_error(what: &str, e: impl std::fmt::Display) -> GazetteerError {
    GazetteerError::Cache {
        message: format!("{what}: {e}"),
    }
}

/// A geodata bundle cached in a single JSON file.
#[derive(Debug, Clone)]
pub struct GeodataCache {
    path: PathBuf,
    ttl: Duration,
}

impl GeodataCache {
    /// Cache at `path`, valid for 24 hours.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ttl: DEFAULT_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The bundle last saved for `source`, if it is still fresh.
    pub fn load(&self, source: &str) -> Option<GeodataBundle> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        let entry: Entry = serde_json::from_str(&contents).ok()?;
        let age = unix_now()?.saturating_sub(entry.cached_at_secs);
        (entry.source == source && age < self.ttl.as_secs()).then_some(entry.bundle)
    }

    /// Write `bundle` as the copy of `source`, creating parent directories.
    pub fn save(&self, source: &str, bundle: &GeodataBundle) -> Result<(), GazetteerError> {
        let entry = EntryRef {
            cached_at_secs: unix_now().ok_or_else(|| cache_error("clock", "before unix epoch"))?,
            source,
            bundle,
        };
        let json = serde_json::to_string(&entry).map_err(|e| cache_error("serialize", e))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| cache_error("create directory", e))?;
        }
        std::fs::write(&self.path, json).map_err(|e| cache_error("write", e))
    }
}
