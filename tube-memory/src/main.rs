use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tube_memory::config::{GameConfig, ServerConfig};
use tube_memory::domain::TRACKED_LINES;
use tube_memory::gazetteer::{
    Gazetteer, GazetteerError, GeodataCache, GeodataClient,
    GeodataClientConfig, load_dir,
};
use tube_memory::web::{AppState, create_router};

/// Fetch geodata from `url`, going through the disk cache.
async fn fetch_remote(url: &str, config: &ServerConfig) -> Result<Gazetteer, GazetteerError> {
    let cache = GeodataCache::new(&config.cache_path);

    let bundle = match cache.load(url) {
        Some(bundle) => {
            info!(path = %cache.path().display(), "using cached geodata");
            bundle
        }
        None => {
            info!(%url, "fetching geodata");
            let client = GeodataClient::new(GeodataClientConfig::new(url))?;
            let bundle = client.fetch_bundle(&TRACKED_LINES).await?;
            if let Err(e) = cache.save(url, &bundle) {
                warn!(error = %e, "failed to cache geodata");
            }
            bundle
        }
    };

    Ok(bundle.into_gazetteer()?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tube_memory=info")),
        )
        .init();

    let config = ServerConfig::from_env();

    let gazetteer = match &config.geodata_url {
        Some(url) => fetch_remote(url, &config).await?,
        None => load_dir(&config.data_dir, &TRACKED_LINES)?,
    };
    info!(
        lines = gazetteer.lines().len(),
        stations = gazetteer.record_count(),
        "loaded geodata"
    );

    let state = AppState::new(gazetteer, GameConfig::default())?;
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Tube Memory listening on http://{}", config.addr);
    info!("  GET  /              - Game page");
    info!("  GET  /health        - Health check");
    info!("  GET  /api/geodata   - Geodata bundle");
    info!("  GET  /api/lines     - Line summaries");

    axum::serve(listener, app).await?;
    Ok(())
}
