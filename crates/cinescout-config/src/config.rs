use serde::{Deserialize, Serialize};
use std::path::Path;

pub const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub regional: RegionalSettings,
    #[serde(default)]
    pub providers: ProviderSettings,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TmdbConfig {
    pub api_key: String,
}

/// Fixed filter behind the regional shelf.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RegionalSettings {
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default = "default_min_vote_count")]
    pub min_vote_count: u32,
}

/// Two-step region preference for watch-provider resolution.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderSettings {
    #[serde(default = "default_region")]
    pub primary_region: String,
    #[serde(default = "default_fallback_region")]
    pub fallback_region: String,
}

fn default_region() -> String {
    "IN".to_string()
}

fn default_fallback_region() -> String {
    "US".to_string()
}

fn default_languages() -> Vec<String> {
    ["hi", "te", "ta", "ml", "kn"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_min_vote_count() -> u32 {
    100
}

impl Default for RegionalSettings {
    fn default() -> Self {
        Self {
            region: default_region(),
            languages: default_languages(),
            min_vote_count: default_min_vote_count(),
        }
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            primary_region: default_region(),
            fallback_region: default_fallback_region(),
        }
    }
}

impl Config {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            tmdb: TmdbConfig {
                api_key: api_key.into(),
            },
            regional: RegionalSettings::default(),
            providers: ProviderSettings::default(),
        }
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.tmdb.api_key.is_empty() || self.tmdb.api_key == API_KEY_PLACEHOLDER {
            return Err(anyhow::anyhow!(
                "TMDB api_key is not configured; run `cinescout config set-key`"
            ));
        }
        if self.regional.languages.is_empty() {
            return Err(anyhow::anyhow!("regional.languages cannot be empty"));
        }
        Ok(())
    }
}
