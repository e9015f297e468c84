//! Application configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default simulated latency of the credential check.
pub const DEFAULT_AUTH_DELAY_MS: u64 = 1000;

/// Root configuration, read from `config.toml`.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HubConfig {
    /// Directory holding the session slot. Defaults to the platform data dir.
    pub storage_dir: Option<PathBuf>,
    /// Simulated latency of the credential check, in milliseconds.
    pub auth_delay_ms: u64,
    /// Fallback log filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            auth_delay_ms: DEFAULT_AUTH_DELAY_MS,
            log_level: "info".to_string(),
        }
    }
}
