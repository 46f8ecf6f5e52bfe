pub mod browse;
pub mod config;
pub mod detail;
pub mod search;
pub mod suggest;
pub mod watchlist;

use cinescout_catalog::{CatalogClient, RegionalFilter};
use cinescout_config::{Config, PathManager};
use cinescout_store::{FileSlot, WatchlistStore};
use color_eyre::eyre::eyre;
use color_eyre::Result;

/// Loads and validates config.toml, pointing the user at `config set-key`
/// when it is missing or incomplete.
pub(crate) fn load_config() -> Result<Config> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();
    tracing::debug!(path = %config_file.display(), "loading config");

    let config = Config::load_from_file(&config_file).map_err(|e| {
        eyre!(
            "failed to load config from {}: {} (run `cinescout config set-key` first)",
            config_file.display(),
            e
        )
    })?;
    config.validate().map_err(|e| eyre!("{}", e))?;
    Ok(config)
}

pub(crate) fn catalog_client(config: &Config) -> Result<CatalogClient> {
    let client = CatalogClient::builder(&config.tmdb.api_key)
        .provider_regions(
            &config.providers.primary_region,
            &config.providers.fallback_region,
        )
        .build()?;
    Ok(client)
}

pub(crate) fn regional_filter(config: &Config) -> RegionalFilter {
    RegionalFilter {
        region: config.regional.region.clone(),
        languages: config.regional.languages.clone(),
        min_vote_count: config.regional.min_vote_count,
    }
}

/// Opens the process-wide watchlist store over its file slot.
pub(crate) fn open_watchlist() -> Result<WatchlistStore> {
    let path_manager = PathManager::default();
    path_manager
        .ensure_directories()
        .map_err(|e| eyre!("{}", e))?;
    Ok(WatchlistStore::open(FileSlot::new(
        path_manager.watchlist_file(),
    )))
}
