pub mod config;
pub mod paths;

pub use config::{Config, ProviderSettings, RegionalSettings, TmdbConfig};
pub use paths::PathManager;
