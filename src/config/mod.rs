mod basic;
mod summary;

pub use basic::BasicConfig;
pub use summary::SummaryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Aggregation settings (see `summary` table in config.toml).
    #[serde(default)]
    pub summary: SummaryConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "PYTORI_";

impl Config {
    /// Builds a Figment that merges defaults, an optional config TOML file and
    /// `PYTORI_`-prefixed environment variables (nested keys split on `__`).
    pub fn figment() -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads configuration from every layer of [`Config::figment`].
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}
