//! Error types for the Gateway

use crate::core::providers::unified_provider::ProviderError;
use thiserror::Error;

/// Result type alias for the Gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the Gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors (missing credential, unreadable config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request used an HTTP method other than POST
    #[error("Method not allowed")]
    MethodNotAllowed(String),

    /// Action name outside the fixed set
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Request body larger than the configured limit
    #[error("Request body exceeds {0} bytes")]
    PayloadTooLarge(usize),

    /// Payload did not match the schema of its action
    #[error("Validation error: {0}")]
    Validation(String),

    /// Upstream model provider failed
    #[error("{0}")]
    Provider(ProviderError),

    /// Upstream succeeded but the expected content was absent
    #[error("{0}")]
    MissingContent(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
