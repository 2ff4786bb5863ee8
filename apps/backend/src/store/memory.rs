//! In-process session store.
//!
//! Backs the binary and the test suites. The mutex makes each
//! compare-and-swap atomic, which is all the gateway's optimistic retry
//! loop needs from a backend.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{SessionKey, SessionStore, StoreError, StoredSession, Version, NO_VERSION};

#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, StoredSession>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current version of a record, for test assertions.
    pub fn version_of(&self, key: &SessionKey) -> Version {
        self.records
            .lock()
            .get(key.as_str())
            .map(|r| r.version)
            .unwrap_or(NO_VERSION)
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn load(&self, key: &SessionKey) -> Result<Option<StoredSession>, StoreError> {
        Ok(self.records.lock().get(key.as_str()).cloned())
    }

    async fn store(
        &self,
        key: &SessionKey,
        expected: Version,
        blob: Vec<u8>,
    ) -> Result<Version, StoreError> {
        let mut records = self.records.lock();
        let actual = records
            .get(key.as_str())
            .map(|r| r.version)
            .unwrap_or(NO_VERSION);

        if actual != expected {
            return Err(StoreError::Conflict { expected, actual });
        }

        let version = expected + 1;
        records.insert(key.as_str().to_string(), StoredSession { version, blob });
        Ok(version)
    }
}
