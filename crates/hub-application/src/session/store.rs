//! Session store.
//!
//! Holds the current identity for the lifetime of the application and mirrors
//! it into a durable [`SessionSlot`]. The store is created once at start-up and
//! handed to whoever needs it; there is no global session.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use hub_core::config::DEFAULT_AUTH_DELAY_MS;
use hub_core::error::Result;
use hub_core::identity::{Identity, IdentityDirectory};
use hub_core::routing::GuardState;
use hub_core::session::SessionSlot;
use tokio::sync::RwLock;

use super::outcome::AuthOutcome;

pub struct SessionStore {
    slot: Arc<dyn SessionSlot>,
    directory: Arc<dyn IdentityDirectory>,
    current: RwLock<Option<Identity>>,
    auth_delay: Duration,
    /// Bumped by every authenticate and clear. An attempt only commits if it
    /// is still the latest when it resolves.
    generation: AtomicU64,
}

impl SessionStore {
    /// Creates an empty store. Call [`SessionStore::restore`] to pick up a
    /// persisted session.
    pub fn new(slot: Arc<dyn SessionSlot>, directory: Arc<dyn IdentityDirectory>) -> Self {
        Self {
            slot,
            directory,
            current: RwLock::new(None),
            auth_delay: Duration::from_millis(DEFAULT_AUTH_DELAY_MS),
            generation: AtomicU64::new(0),
        }
    }

    /// Sets the simulated latency of the credential check.
    pub fn with_auth_delay(mut self, delay: Duration) -> Self {
        self.auth_delay = delay;
        self
    }

    /// Loads the persisted identity and makes it current.
    ///
    /// An empty slot, an unreadable slot and a record that does not decode all
    /// yield `None`: the application starts logged out.
    pub async fn restore(&self) -> Option<Identity> {
        let restored = match self.slot.read().await {
            Ok(Some(raw)) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => Some(identity),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring malformed session record");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Session slot unreadable, starting logged out");
                None
            }
        };

        if let Some(identity) = &restored {
            tracing::info!(email = %identity.email, role = %identity.role, "Session restored");
        }

        *self.current.write().await = restored.clone();
        restored
    }

    /// Checks the credentials and, on success, stores the identity durably and
    /// makes it current.
    pub async fn authenticate(&self, identifier: &str, secret: &str) -> Result<AuthOutcome> {
        let attempt = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(identifier, attempt, "Authentication started");

        if !self.auth_delay.is_zero() {
            tokio::time::sleep(self.auth_delay).await;
        }

        let verified = self.directory.verify(identifier, secret);

        let mut current = self.current.write().await;
        if self.generation.load(Ordering::SeqCst) != attempt {
            tracing::debug!(identifier, attempt, "Authentication superseded");
            return Ok(AuthOutcome::Superseded);
        }

        let Some(identity) = verified else {
            tracing::info!(identifier, "Authentication rejected");
            return Ok(AuthOutcome::rejected());
        };

        let record = serde_json::to_string(&identity)?;
        self.slot.write(&record).await?;
        *current = Some(identity.clone());

        tracing::info!(email = %identity.email, role = %identity.role, "Authenticated");
        Ok(AuthOutcome::Authenticated(identity))
    }

    /// Removes the current identity and its durable record. Pending
    /// authentication attempts are discarded.
    pub async fn clear(&self) -> Result<()> {
        self.generation.fetch_add(1, Ordering::SeqCst);

        let mut current = self.current.write().await;
        self.slot.remove().await?;
        if let Some(identity) = current.take() {
            tracing::info!(email = %identity.email, "Logged out");
        }
        Ok(())
    }

    pub async fn current(&self) -> Option<Identity> {
        self.current.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    pub async fn guard_state(&self) -> GuardState {
        GuardState::from_identity(self.current.read().await.as_ref())
    }
}
