//! Session record storage port.
//!
//! The canonical session lives in an external store as an opaque,
//! versioned blob. The port is deliberately tiny: a versioned load and a
//! compare-and-swap store. Optimistic concurrency is the contract — a
//! `store` only succeeds if the record's version has not moved since the
//! matching `load` — which is what lets the gateway guarantee no lost
//! writes without the core logic knowing about retries.

use async_trait::async_trait;
use thiserror::Error;

pub mod gateway;
pub mod memory;

pub use gateway::SessionGateway;
pub use memory::MemoryStore;

/// Monotonic record version. [`NO_VERSION`] means "record does not exist".
pub type Version = u64;

pub const NO_VERSION: Version = 0;

/// Logical key of one session record.
///
/// v1 only ever uses [`SessionKey::default`], but the key is threaded
/// through everywhere so multi-session support is a data change, not a
/// redesign.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionKey {
    fn default() -> Self {
        Self("0".to_string())
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A loaded session record: the serialized blob plus the version it had at
/// load time, to be echoed back on store.
#[derive(Debug, Clone)]
pub struct StoredSession {
    pub version: Version,
    pub blob: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// The record's version moved between load and store. Retryable.
    #[error("session version conflict: expected {expected}, found {actual}")]
    Conflict { expected: Version, actual: Version },
    /// The backend itself failed. Not retryable at this layer.
    #[error("session storage failure: {0}")]
    Backend(String),
}

/// Versioned load/store pair over session records.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the record for `key`, or `None` if no session exists yet.
    async fn load(&self, key: &SessionKey) -> Result<Option<StoredSession>, StoreError>;

    /// Store `blob` for `key` if the current version still equals
    /// `expected` (use [`NO_VERSION`] to create). Returns the new version.
    async fn store(
        &self,
        key: &SessionKey,
        expected: Version,
        blob: Vec<u8>,
    ) -> Result<Version, StoreError>;
}
