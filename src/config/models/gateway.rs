//! Main gateway configuration

#![allow(missing_docs)]

use super::*;
use crate::core::providers::gemini::GeminiConfig;
use serde::{Deserialize, Serialize};

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream model provider configuration
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
