//! Client configuration

use serde::{Deserialize, Serialize};

/// Default proxy path
pub const DEFAULT_ENDPOINT_PATH: &str = "/api/gemini";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Gateway origin, e.g. `http://localhost:8888`
    pub base_url: String,
    /// Proxy path on the gateway
    #[serde(default = "default_endpoint_path")]
    pub endpoint_path: String,
    /// Request timeout in seconds; none means wait for the gateway
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint_path: default_endpoint_path(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout = Some(timeout_secs);
        self
    }
}

fn default_endpoint_path() -> String {
    DEFAULT_ENDPOINT_PATH.to_string()
}
