use cinescout_config::{Config, PathManager};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use dialoguer::Input;

use crate::output::Output;

fn mask(secret: &str) -> String {
    let mut chars = secret.chars();
    let prefix: String = chars.by_ref().take(4).collect();
    if chars.next().is_none() {
        return "****".to_string();
    }
    format!("{prefix}****")
}

pub fn run_show(output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();

    let Ok(config) = Config::load_from_file(&config_file) else {
        output.warn(format!(
            "No configuration at {} yet; run `cinescout config set-key`",
            config_file.display()
        ));
        return Ok(());
    };

    if !output.is_human() {
        output.json(&serde_json::json!({
            "config_file": config_file.display().to_string(),
            "tmdb": { "api_key": mask(&config.tmdb.api_key) },
            "regional": {
                "region": config.regional.region,
                "languages": config.regional.languages,
                "min_vote_count": config.regional.min_vote_count,
            },
            "providers": {
                "primary_region": config.providers.primary_region,
                "fallback_region": config.providers.fallback_region,
            },
        }));
        return Ok(());
    }

    output.info(format!("Config file: {}", config_file.display()));
    output.info(format!("TMDB API key: {}", mask(&config.tmdb.api_key)));
    output.info(format!(
        "Regional shelf: {} ({}), vote_count >= {}",
        config.regional.region,
        config.regional.languages.join("|"),
        config.regional.min_vote_count
    ));
    output.info(format!(
        "Provider regions: {} then {}",
        config.providers.primary_region, config.providers.fallback_region
    ));
    Ok(())
}

pub fn run_set_key(key: Option<String>, output: &Output) -> Result<()> {
    let key = match key {
        Some(key) => key,
        None => Input::new()
            .with_prompt("TMDB API key")
            .interact_text()
            .map_err(|e| eyre!("{}", e))?,
    };

    if key.trim().is_empty() {
        return Err(eyre!("API key cannot be empty"));
    }

    let path_manager = PathManager::default();
    path_manager
        .ensure_directories()
        .map_err(|e| eyre!("{}", e))?;
    let config_file = path_manager.config_file();

    // Preserve any tuned regional/provider settings on re-keying.
    let mut config =
        Config::load_from_file(&config_file).unwrap_or_else(|_| Config::with_api_key(""));
    config.tmdb.api_key = key.trim().to_string();
    config
        .save_to_file(&config_file)
        .map_err(|e| eyre!("{}", e))?;

    output.success(format!("API key saved to {}", config_file.display()));
    Ok(())
}
