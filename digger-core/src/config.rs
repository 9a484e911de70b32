//! App configuration: where the backend lives and how list views are sized.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no config directory on this platform")]
    NoConfigDir,
}

fn default_api_url() -> String {
    "http://127.0.0.1:8006".to_string()
}

fn default_site_url() -> String {
    "https://www.deezer.com".to_string()
}

fn default_tracked_page_size() -> u32 {
    5
}

fn default_upload_page_size() -> u32 {
    10
}

/// YAML config file structure. Every field has a default so a partial (or
/// missing) file still loads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the crawler backend. Override with `DIGGER_API_URL`.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Public catalog site used for artist/album deep links.
    #[serde(default = "default_site_url")]
    pub site_url: String,
    /// Page size for the artist curation views.
    #[serde(default = "default_tracked_page_size")]
    pub tracked_page_size: u32,
    /// Page size for the upload manager view.
    #[serde(default = "default_upload_page_size")]
    pub upload_page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            site_url: default_site_url(),
            tracked_page_size: default_tracked_page_size(),
            upload_page_size: default_upload_page_size(),
        }
    }
}

impl Config {
    /// Path of the config file under the platform config dir.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("digger").join("config.yaml"))
    }

    /// Load the config file, falling back to defaults when it is absent.
    /// `DIGGER_API_URL` overrides the configured backend URL.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&Self::path()?)?;
        if let Ok(url) = std::env::var("DIGGER_API_URL") {
            if !url.is_empty() {
                config.api_url = url;
            }
        }
        Ok(config)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Ok(serde_yaml::from_str(&std::fs::read_to_string(path)?)?)
        } else {
            info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Write the config file, creating parent directories as needed.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }
}
