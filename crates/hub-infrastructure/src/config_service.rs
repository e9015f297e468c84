//! Configuration loading.

use hub_core::config::HubConfig;
use hub_core::error::{HubError, Result};
use std::path::{Path, PathBuf};

use crate::paths::HubPaths;

/// Loads [`HubConfig`] from a TOML file.
///
/// A missing file yields the defaults; a file that exists but does not parse
/// is a configuration error.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Service reading the platform default `config.toml`.
    pub fn from_default_location() -> Result<Self> {
        Ok(Self::new(HubPaths::config_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<HubConfig> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no config file, using defaults");
                return Ok(HubConfig::default());
            }
            Err(e) => return Err(e.into()),
        };

        toml::from_str(&content).map_err(|e| {
            HubError::config(format!("Invalid {}: {}", self.path.display(), e))
        })
    }
}
