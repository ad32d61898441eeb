// Application state module
// Shared runtime state handed to every connection task

use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Resolved function route, computed once at startup
    pub function_route: String,

    pub active_connections: AtomicUsize,
    /// Signalled whenever the last active connection is released
    pub connections_drained: Notify,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            function_route: config.function.route(),
            active_connections: AtomicUsize::new(0),
            connections_drained: Notify::new(),
        }
    }

    pub const fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }

    /// Count a new connection, returning the number active before it
    pub fn acquire_connection(&self) -> usize {
        self.active_connections.fetch_add(1, Ordering::SeqCst)
    }

    /// Release a connection, waking the shutdown drain when none are left
    pub fn release_connection(&self) {
        if self.active_connections.fetch_sub(1, Ordering::SeqCst) == 1 {
            // notify_one keeps a permit if the drain is not waiting yet
            self.connections_drained.notify_one();
        }
    }

    pub fn connection_count(&self) -> usize {
        self.active_connections.load(Ordering::SeqCst)
    }
}
