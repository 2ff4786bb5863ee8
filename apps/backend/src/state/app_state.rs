use std::sync::Arc;

use crate::store::{SessionGateway, SessionKey};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Gateway to the one persisted session record
    pub gateway: Arc<SessionGateway>,
    /// Key of the session this deployment serves
    pub session_key: SessionKey,
}

impl AppState {
    /// Create a new AppState serving the default session key
    pub fn new(gateway: SessionGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
            session_key: SessionKey::default(),
        }
    }

    /// Create a new AppState serving a specific session key
    pub fn with_key(gateway: SessionGateway, session_key: SessionKey) -> Self {
        Self {
            gateway: Arc::new(gateway),
            session_key,
        }
    }
}
