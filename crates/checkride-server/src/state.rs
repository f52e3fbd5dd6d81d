//! Shared application state.

use std::time::Instant;

use tokio::sync::RwLock;

use checkride_store::SessionStore;

/// State shared across all request handlers.
///
/// The store sits behind a single RwLock; the system assumes one local
/// instructor, so writer contention is not a concern.
pub struct AppState {
    /// The session store.
    pub store: RwLock<SessionStore>,
    started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(SessionStore::new()),
            started_at: Instant::now(),
        }
    }

    /// Seconds since the server started.
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
