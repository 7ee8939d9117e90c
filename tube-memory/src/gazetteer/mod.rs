//! Station geodata: line datasets, the name index, and loading.
//!
//! The gazetteer is loaded once at startup, either from a directory of
//! GeoJSON files or from a remote host (cached on disk), and is read-only
//! afterwards.

mod bundle;
#[cfg(feature = "server")]
mod cache;
#[cfg(feature = "server")]
mod client;
mod dataset;
mod error;
mod index;
mod loader;

pub use bundle::{GeodataBundle, LineBundle};
#[cfg(feature = "server")]
pub use cache::GeodataCache;
#[cfg(feature = "server")]
pub use client::{GeodataClient, GeodataClientConfig};
pub use dataset::{Gazetteer, LineDataset};
pub use error::GazetteerError;
pub use index::DiscoveryIndex;
pub use loader::{PATHS_FILE, dataset_file_name, load_bundle, load_dir};
