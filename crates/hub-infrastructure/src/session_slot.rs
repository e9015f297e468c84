//! Session slot implementations.

use async_trait::async_trait;
use hub_core::error::{HubError, Result};
use hub_core::session::SessionSlot;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::storage::AtomicFile;

/// Session slot backed by one JSON file on disk.
///
/// File I/O runs on the blocking pool so the slot can be awaited from the
/// front end's event loop.
#[derive(Debug, Clone)]
pub struct FileSessionSlot {
    file: AtomicFile,
}

impl FileSessionSlot {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path),
        }
    }

    /// Slot stored under the standard session key inside `storage_dir`.
    pub fn in_dir(storage_dir: &Path) -> Self {
        Self::new(crate::paths::HubPaths::session_file(storage_dir))
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    async fn run_blocking<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(AtomicFile) -> Result<T> + Send + 'static,
    {
        let file = self.file.clone();
        tokio::task::spawn_blocking(move || op(file))
            .await
            .map_err(|e| HubError::internal(format!("Failed to join task: {}", e)))?
    }
}

#[async_trait]
impl SessionSlot for FileSessionSlot {
    async fn read(&self) -> Result<Option<String>> {
        self.run_blocking(|file| Ok(file.load()?)).await
    }

    async fn write(&self, value: &str) -> Result<()> {
        let value = value.to_string();
        self.run_blocking(move |file| Ok(file.save(&value)?)).await?;
        tracing::debug!(path = %self.path().display(), "session slot written");
        Ok(())
    }

    async fn remove(&self) -> Result<()> {
        self.run_blocking(|file| Ok(file.remove()?)).await?;
        tracing::debug!(path = %self.path().display(), "session slot removed");
        Ok(())
    }
}

/// Session slot that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionSlot {
    value: Arc<Mutex<Option<String>>>,
}

impl MemorySessionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Arc::new(Mutex::new(Some(value.into()))),
        }
    }
}

#[async_trait]
impl SessionSlot for MemorySessionSlot {
    async fn read(&self) -> Result<Option<String>> {
        Ok(self.value.lock().await.clone())
    }

    async fn write(&self, value: &str) -> Result<()> {
        *self.value.lock().await = Some(value.to_string());
        Ok(())
    }

    async fn remove(&self) -> Result<()> {
        *self.value.lock().await = None;
        Ok(())
    }
}
