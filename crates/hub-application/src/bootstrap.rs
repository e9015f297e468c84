//! Application start-up wiring.

use std::sync::Arc;
use std::time::Duration;

use hub_core::config::HubConfig;
use hub_core::error::Result;
use hub_core::identity::{IdentityDirectory, StaticDirectory};
use hub_core::session::SessionSlot;
use hub_infrastructure::paths::HubPaths;
use hub_infrastructure::{ClientCatalog, FileSessionSlot};

use crate::navigator::Navigator;
use crate::session::SessionStore;

/// Everything the front end needs, built once at start-up.
pub struct HubContext {
    pub config: HubConfig,
    pub session_store: Arc<SessionStore>,
    pub catalog: ClientCatalog,
}

impl HubContext {
    /// Wires the file-backed session slot and the demo directory, then restores
    /// any persisted session.
    pub async fn bootstrap(config: HubConfig) -> Result<Self> {
        let storage_dir = HubPaths::storage_dir(&config)?;
        let slot = FileSessionSlot::in_dir(&storage_dir);
        tracing::info!(path = %slot.path().display(), "Using session slot");

        Self::with_parts(config, Arc::new(slot), Arc::new(StaticDirectory::demo())).await
    }

    /// Same as [`HubContext::bootstrap`] with explicit slot and directory.
    pub async fn with_parts(
        config: HubConfig,
        slot: Arc<dyn SessionSlot>,
        directory: Arc<dyn IdentityDirectory>,
    ) -> Result<Self> {
        let session_store = SessionStore::new(slot, directory)
            .with_auth_delay(Duration::from_millis(config.auth_delay_ms));
        let session_store = Arc::new(session_store);
        session_store.restore().await;

        let catalog = ClientCatalog::bundled()?;

        Ok(Self {
            config,
            session_store,
            catalog,
        })
    }

    pub fn navigator(&self) -> Navigator {
        Navigator::new(Arc::clone(&self.session_store))
    }
}
