//! On-disk configuration for the catalog search endpoint.
//!
//! A small TOML file under the `.dealrack` directory carries the endpoint and
//! API key. Everything else that tunes the picker (page size, debounce delay,
//! scroll threshold) is a code constant.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_ENDPOINT: &str = "https://stageapi.monkcommerce.app/task/products/search";

/// Errors raised while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No usable config directory found.
    #[error("No suitable config directory found")]
    NoConfigDir,
    /// Failed to read the config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the TOML config.
    #[error("Invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to serialize the config for writing.
    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),
}

/// Settings for the remote catalog search service.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the paged product search endpoint.
    pub endpoint: String,
    /// Value sent in the `x-api-key` header.
    pub api_key: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
        }
    }
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(|_| ConfigError::NoConfigDir)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, returning defaults if missing.
pub fn load_or_default() -> Result<CatalogConfig, ConfigError> {
    load_from_path(&config_path()?)
}

pub(crate) fn load_from_path(path: &Path) -> Result<CatalogConfig, ConfigError> {
    if !path.exists() {
        return Ok(CatalogConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Save configuration to its default location.
pub fn save(config: &CatalogConfig) -> Result<(), ConfigError> {
    save_to_path(config, &config_path()?)
}

pub(crate) fn save_to_path(config: &CatalogConfig, path: &Path) -> Result<(), ConfigError> {
    let text = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
