//! Configuration types for the feature layer and the inspection binary.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::PathBuf;

use crate::FeatureError;

// ============================================================================
// Default configuration constants
// ============================================================================

/// Default maximum rows per emitted record batch.
pub const DEFAULT_BATCH_SIZE: usize = 1024;

/// Default path of the parsed task data dump read by the binary.
pub const DEFAULT_INPUT_PATH: &str = "./taskdata.json";

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "features.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "ISOXML_";

/// Feature layer configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    /// Input configuration.
    pub input: InputConfig,
    /// Row producer configuration.
    pub reader: ReaderConfig,
}

impl FeaturesConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order (later sources override earlier):
    /// 1. Default values
    /// 2. `features.toml` in current directory
    /// 3. Environment variables prefixed with `ISOXML_` (nested keys split on `__`)
    pub fn load() -> Result<Self, FeatureError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &str) -> Result<Self, FeatureError> {
        let config: Self = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| FeatureError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), FeatureError> {
        if self.reader.batch_size == 0 {
            return Err(FeatureError::Config(
                "reader.batch_size must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Where the parsed task data is read from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path to a JSON dump of the parser's result set.
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INPUT_PATH),
        }
    }
}

/// Row producer configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Maximum rows per record batch.
    pub batch_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}
