//! Configuration management for the Gateway
//!
//! Configuration is resolved once at startup: YAML file (optional), then
//! environment overrides, then validation. The result is passed explicitly
//! into the server and dispatcher.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable holding the upstream API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Environment variable overriding the bind host
pub const HOST_ENV: &str = "GROOVEGEN_HOST";
/// Environment variable overriding the bind port
pub const PORT_ENV: &str = "GROOVEGEN_PORT";
/// Environment variable overriding the upstream base URL
pub const BASE_URL_ENV: &str = "GEMINI_BASE_URL";

/// Main configuration struct for the Gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let gateway: GatewayConfig = serde_yaml::from_str(&content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { gateway };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Resolve the startup configuration
    ///
    /// A missing file falls back to defaults; a present but invalid file is
    /// an error. Environment overrides are applied last.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path).await?
        } else {
            warn!(
                "Configuration file {:?} not found, using defaults",
                path
            );
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides using the given lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup(API_KEY_ENV) {
            self.gateway.gemini.api_key = Some(api_key);
        }
        if let Some(host) = lookup(HOST_ENV) {
            self.gateway.server.host = host;
        }
        if let Some(port) = lookup(PORT_ENV) {
            self.gateway.server.port = port
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid {}: {}", PORT_ENV, e)))?;
        }
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            self.gateway.gemini.base_url = base_url;
        }

        // An empty key is the same as no key.
        if self
            .gateway
            .gemini
            .api_key
            .as_deref()
            .is_some_and(|k| k.trim().is_empty())
        {
            self.gateway.gemini.api_key = None;
        }
        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get upstream configuration
    pub fn gemini(&self) -> &crate::core::providers::gemini::GeminiConfig {
        &self.gateway.gemini
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.gateway.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.gateway
            .server
            .validate()
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        self.gateway
            .server
            .cors
            .validate()
            .map_err(|e| GatewayError::Config(format!("CORS config error: {}", e)))?;

        self.gateway
            .gemini
            .validate()
            .map_err(|e| GatewayError::Config(format!("Gemini config error: {}", e)))?;

        self.gateway
            .logging
            .validate()
            .map_err(|e| GatewayError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.gateway)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
