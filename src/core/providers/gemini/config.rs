//! Gemini Configuration Module

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use super::models::GeminiModels;
use crate::config::Validate;
use crate::utils::logging::mask_secret;

/// Google AI Studio endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// REST API version
pub const DEFAULT_API_VERSION: &str = "v1beta";

/// Upstream provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key (Google AI Studio). Absent means every request fails with a
    /// configuration error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API version path segment
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Request timeout in seconds; unset means the upstream call may run
    /// for as long as the upstream takes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,

    /// Connect timeout in seconds; unset means no connect deadline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<u64>,

    /// Model per action family
    #[serde(default)]
    pub models: GeminiModels,
}

impl GeminiConfig {
    /// Configuration for Google AI Studio with the given key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Settings
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Settings
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.request_timeout = Some(timeout_secs);
        self
    }

    /// Whether a credential is present
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// `generateContent` endpoint for a model
    pub fn generate_content_url(&self, model: &str) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            model
        )
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout.map(Duration::from_secs)
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            api_version: default_api_version(),
            request_timeout: None,
            connect_timeout: None,
            models: GeminiModels::default(),
        }
    }
}

// The key must never reach the logs.
impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_deref().map(mask_secret))
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("models", &self.models)
            .finish()
    }
}

impl Validate for GeminiConfig {
    fn validate(&self) -> Result<(), String> {
        url::Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid base URL '{}': {}", self.base_url, e))?;

        if self.api_version.trim().is_empty() {
            return Err("API version cannot be empty".to_string());
        }

        if self.request_timeout == Some(0) {
            return Err("Request timeout must be greater than 0".to_string());
        }

        if self.connect_timeout == Some(0) {
            return Err("Connect timeout must be greater than 0".to_string());
        }

        if let (Some(connect), Some(request)) = (self.connect_timeout, self.request_timeout) {
            if connect > request {
                return Err("Connect timeout cannot be greater than request timeout".to_string());
            }
        }

        for (family, model) in self.models.entries() {
            if model.trim().is_empty() {
                return Err(format!("Model for '{}' cannot be empty", family));
            }
        }

        Ok(())
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}
