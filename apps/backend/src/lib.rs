#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod infra;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod trace_ctx;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::CardCorpus;
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use middleware::RequestTrace;
pub use services::{Commit, Outcome, RoundService};
pub use state::AppState;
pub use store::{MemoryStore, SessionGateway, SessionKey, SessionStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
