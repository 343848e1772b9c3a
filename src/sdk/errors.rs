//! Error handling

use thiserror::Error;

/// Message used when the server's error body carries no usable message
pub const GENERIC_API_ERROR: &str = "API request failed";

/// SDK error
#[derive(Error, Debug)]
pub enum SDKError {
    /// Server answered with an error envelope; the message is shown verbatim
    #[error("{0}")]
    Api(String),

    /// Configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Transport failure
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Success body did not have the expected shape
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Local file could not be read
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

impl SDKError {
    /// Error for a non-2xx response body
    ///
    /// Uses the body's `error` string when present and non-empty.
    pub fn from_error_body(body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("error")?
                    .as_str()
                    .filter(|message| !message.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| GENERIC_API_ERROR.to_string());
        SDKError::Api(message)
    }
}

/// Result type
pub type Result<T> = std::result::Result<T, SDKError>;
