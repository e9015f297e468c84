//! Durable session slot.
//!
//! A session is persisted as the serialized identity record under a single
//! key. The slot itself only moves raw text; decoding and the "malformed means
//! logged out" rule live in the session store.

use async_trait::async_trait;

use crate::error::Result;

/// Storage key of the persisted session record.
pub const SESSION_KEY: &str = "hering_user";

/// A durable key-value slot holding at most one value.
#[async_trait]
pub trait SessionSlot: Send + Sync {
    /// Reads the stored value. `Ok(None)` when the slot is empty.
    async fn read(&self) -> Result<Option<String>>;

    /// Replaces the stored value atomically.
    async fn write(&self, value: &str) -> Result<()>;

    /// Empties the slot. Removing an empty slot succeeds.
    async fn remove(&self) -> Result<()>;
}
