//! Unified path management for Sales Hub files.
//!
//! ```text
//! ~/.config/sales-hub/         # Config directory
//! ├── config.toml              # Application configuration
//! └── logs/                    # Application logs
//!     └── sales-hub.log.YYYY-MM-DD
//!
//! ~/.local/share/sales-hub/    # Data directory
//! └── hering_user.json         # Persisted session slot
//! ```

use std::path::PathBuf;

use hub_core::config::HubConfig;
use hub_core::session::SESSION_KEY;

const APP_DIR: &str = "sales-hub";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config/data directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for hub_core::HubError {
    fn from(e: PathError) -> Self {
        hub_core::HubError::config(e.to_string())
    }
}

/// Path resolution for Sales Hub.
pub struct HubPaths;

impl HubPaths {
    /// Returns the configuration directory (e.g., `~/.config/sales-hub/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the data directory (e.g., `~/.local/share/sales-hub/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }

    /// Directory holding the session slot: the configured override, or the
    /// data directory.
    pub fn storage_dir(config: &HubConfig) -> Result<PathBuf, PathError> {
        match &config.storage_dir {
            Some(dir) => Ok(dir.clone()),
            None => Self::data_dir(),
        }
    }

    /// File backing the session slot inside `storage_dir`.
    pub fn session_file(storage_dir: &std::path::Path) -> PathBuf {
        storage_dir.join(format!("{SESSION_KEY}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file() {
        let config_file = HubPaths::config_file().unwrap();
        assert!(config_file.ends_with("sales-hub/config.toml"));
        let config_dir = HubPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_logs_dir() {
        let logs_dir = HubPaths::logs_dir().unwrap();
        assert!(logs_dir.ends_with("logs"));
        assert!(logs_dir.starts_with(HubPaths::config_dir().unwrap()));
    }

    #[test]
    fn test_storage_dir_override() {
        let config = HubConfig {
            storage_dir: Some(PathBuf::from("/tmp/hub-store")),
            ..HubConfig::default()
        };
        assert_eq!(
            HubPaths::storage_dir(&config).unwrap(),
            PathBuf::from("/tmp/hub-store")
        );
    }

    #[test]
    fn test_session_file_name() {
        let file = HubPaths::session_file(std::path::Path::new("/data"));
        assert_eq!(file, PathBuf::from("/data/hering_user.json"));
    }
}
