//! Application state shared by all handlers.
//!
//! [`AppState`] carries an `Arc<InMemoryStore>`. The store owns its own lock,
//! so handlers never touch a mutex directly; each store call is one critical
//! section. Every `AppState::new()` starts from an empty store, which keeps
//! independently built routers isolated from each other.

use std::sync::Arc;

use itemstore_storage::InMemoryStore;

/// Shared application state for the HTTP server.
#[derive(Clone, Default)]
pub struct AppState {
    /// The item store.
    pub store: Arc<InMemoryStore>,
}

impl AppState {
    /// Creates state backed by a fresh, empty store.
    pub fn new() -> Self {
        AppState {
            store: Arc::new(InMemoryStore::new()),
        }
    }
}
