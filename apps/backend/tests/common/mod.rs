//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use backend::config::CardCorpus;
use backend::infra::rng::FixedSeedSource;
use backend::store::{MemoryStore, SessionGateway, SessionKey};
use backend::RoundService;

#[ctor::ctor]
fn init_logging() {
    backend_test_support::test_logging::init();
}

pub fn test_corpus() -> CardCorpus {
    CardCorpus::new(
        (0..6).map(|i| format!("prompt {i}")).collect(),
        (0..60).map(|i| format!("answer {i}")).collect(),
    )
    .unwrap()
}

pub fn test_gateway(seed: u64) -> (Arc<MemoryStore>, SessionGateway) {
    let store = Arc::new(MemoryStore::new());
    let gateway = SessionGateway::new(
        store.clone(),
        Arc::new(test_corpus()),
        Arc::new(FixedSeedSource::new(seed)),
    );
    (store, gateway)
}

pub async fn join(
    gateway: &SessionGateway,
    key: &SessionKey,
    name: &str,
) -> backend::domain::PlayerView {
    gateway
        .with_session(key, |state, rng| RoundService.join(state, rng, name))
        .await
        .expect("join should succeed")
}
