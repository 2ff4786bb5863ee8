//! Load–mutate–store wrapper around a single session record.
//!
//! Every inbound action runs as one "turn": load the record (or build a
//! fresh session when none exists), apply exactly one controller operation
//! against an exclusively-owned in-memory copy, and write the result back
//! unless the operation signalled read-only. Two turns can race on the same
//! record, so the write is a compare-and-swap on the version observed at
//! load time; on conflict the whole turn is replayed against the fresh
//! record. Rejections and storage failures never write — effects commit
//! entirely or not at all.

use std::sync::Arc;

use rand::RngCore;
use tracing::{debug, warn};

use crate::config::CardCorpus;
use crate::domain::SessionState;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::infra::rng::RngSource;
use crate::services::{Commit, Outcome};
use crate::store::{SessionKey, SessionStore, StoreError, NO_VERSION};

/// Turns replayed on version conflicts before giving up.
const MAX_COMMIT_ATTEMPTS: u32 = 8;

pub struct SessionGateway {
    store: Arc<dyn SessionStore>,
    corpus: Arc<CardCorpus>,
    rng_source: Arc<dyn RngSource>,
}

impl SessionGateway {
    pub fn new(
        store: Arc<dyn SessionStore>,
        corpus: Arc<CardCorpus>,
        rng_source: Arc<dyn RngSource>,
    ) -> Self {
        Self {
            store,
            corpus,
            rng_source,
        }
    }

    pub fn corpus(&self) -> &CardCorpus {
        &self.corpus
    }

    /// Run one controller action against the session at `key`.
    ///
    /// The action receives an exclusive in-memory session plus an RNG and
    /// returns an [`Outcome`]: its reply value and whether the session must
    /// be persisted. Actions may be replayed on write conflicts, so they
    /// must not carry side effects beyond the session itself.
    pub async fn with_session<T, F>(&self, key: &SessionKey, mut action: F) -> Result<T, AppError>
    where
        F: FnMut(&mut SessionState, &mut dyn RngCore) -> Result<Outcome<T>, DomainError>,
    {
        let mut rng = self.rng_source.action_rng();

        for attempt in 1..=MAX_COMMIT_ATTEMPTS {
            let loaded = self
                .store
                .load(key)
                .await
                .map_err(|e| AppError::storage(format!("failed to load session {key}: {e}")))?;

            let (version, mut state) = match loaded {
                Some(record) => {
                    let state: SessionState =
                        serde_json::from_slice(&record.blob).map_err(|e| {
                            AppError::internal(
                                ErrorCode::DataCorruption,
                                format!("session record {key} failed to decode: {e}"),
                            )
                        })?;
                    (record.version, state)
                }
                None => {
                    debug!(%key, "no session record, starting fresh");
                    let state = SessionState::reset(
                        self.corpus.black(),
                        self.corpus.white(),
                        rng.as_mut(),
                    )?;
                    (NO_VERSION, state)
                }
            };

            let outcome = action(&mut state, rng.as_mut())?;

            match outcome.commit {
                Commit::Skip => return Ok(outcome.value),
                Commit::Persist => {
                    let blob = serde_json::to_vec(&state).map_err(|e| {
                        AppError::storage(format!("failed to encode session {key}: {e}"))
                    })?;

                    match self.store.store(key, version, blob).await {
                        Ok(new_version) => {
                            debug!(%key, version = new_version, "session persisted");
                            return Ok(outcome.value);
                        }
                        Err(StoreError::Conflict { expected, actual }) => {
                            debug!(%key, attempt, expected, actual, "session version moved, replaying turn");
                            continue;
                        }
                        Err(e) => {
                            return Err(AppError::storage(format!(
                                "failed to store session {key}: {e}"
                            )));
                        }
                    }
                }
            }
        }

        warn!(%key, attempts = MAX_COMMIT_ATTEMPTS, "giving up on contended session record");
        Err(AppError::conflict(
            ErrorCode::SessionContention,
            format!("session {key} kept changing underneath {MAX_COMMIT_ATTEMPTS} attempts"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::rng::FixedSeedSource;
    use crate::services::RoundService;
    use crate::store::MemoryStore;

    fn gateway_with_store() -> (Arc<MemoryStore>, SessionGateway) {
        let store = Arc::new(MemoryStore::new());
        let gateway = SessionGateway::new(
            store.clone(),
            Arc::new(CardCorpus::starter()),
            Arc::new(FixedSeedSource::new(11)),
        );
        (store, gateway)
    }

    #[tokio::test]
    async fn first_mutating_turn_creates_the_record() {
        let (store, gateway) = gateway_with_store();
        let key = SessionKey::default();
        assert_eq!(store.version_of(&key), NO_VERSION);

        let view = gateway
            .with_session(&key, |state, rng| RoundService.join(state, rng, "Alice"))
            .await
            .unwrap();

        assert_eq!(view.hand.len(), crate::domain::HAND_SIZE);
        assert_eq!(store.version_of(&key), 1);
    }

    #[tokio::test]
    async fn read_only_turns_do_not_write() {
        let (store, gateway) = gateway_with_store();
        let key = SessionKey::default();

        let view = gateway
            .with_session(&key, |state, rng| RoundService.join(state, rng, "Alice"))
            .await
            .unwrap();
        assert_eq!(store.version_of(&key), 1);

        gateway
            .with_session(&key, |state, _| RoundService.query(state, &view.player_id))
            .await
            .unwrap();
        assert_eq!(store.version_of(&key), 1);
    }

    #[tokio::test]
    async fn rejected_turns_do_not_write() {
        let (store, gateway) = gateway_with_store();
        let key = SessionKey::default();

        let err = gateway
            .with_session(&key, |state, _| RoundService.query(state, "ghost"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(store.version_of(&key), NO_VERSION);
    }
}
