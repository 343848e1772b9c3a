//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::dispatch::Dispatcher;
use std::sync::Arc;
use std::time::Instant;

/// HTTP server state shared across handlers
///
/// Everything here is resolved once at startup and read-only afterwards.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Action dispatcher
    pub dispatcher: Arc<Dispatcher>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config, dispatcher: Dispatcher) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
            started_at: Instant::now(),
        }
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
