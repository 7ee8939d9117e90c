//! Geodata loading error types.

use crate::domain::DomainError;

/// Errors that can occur when loading or fetching geodata.
#[derive(Debug, thiserror::Error)]
pub enum GazetteerError {
    /// HTTP request failed
    #[cfg(feature = "server")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Geodata host returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Reading a geodata file failed
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// A dataset is not valid GeoJSON of the expected shape
    #[error("JSON parse error in {origin}: {message}")]
    Json { origin: String, message: String },

    /// The data parsed but violates a domain rule
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Cache operation failed
    #[error("cache error: {message}")]
    Cache { message: String },
}
