//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::AttendeeStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Owns the injected store handle, so there is
/// no ambient connection global anywhere in the server.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: Arc<dyn AttendeeStore>,
}

impl AppState {
    /// Create a new application state around a storage backend.
    #[must_use]
    pub fn new(config: ServerConfig, store: Arc<dyn AttendeeStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get the attendee storage backend.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn AttendeeStore> {
        &self.inner.store
    }
}
