//! Gemini Error Handling
//!
//! Maps upstream HTTP failures and error bodies onto [`ProviderError`].

use crate::core::providers::unified_provider::ProviderError;
use serde_json::Value;

pub const PROVIDER: &str = "gemini";

/// Error mapper for the Gemini REST API
pub struct GeminiErrorMapper;

impl GeminiErrorMapper {
    /// Map a non-2xx status and its body
    pub fn from_http_status(status: u16, body: &str) -> ProviderError {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        if let Some(json) = parsed.as_ref().filter(|v| v.get("error").is_some()) {
            return Self::from_api_response(json);
        }

        let message = if body.trim().is_empty() {
            format!("HTTP {}", status)
        } else {
            body.trim().to_string()
        };

        match status {
            400 => ProviderError::invalid_request(PROVIDER, message),
            401 | 403 => ProviderError::authentication(PROVIDER, message),
            404 => ProviderError::model_not_found(PROVIDER, message),
            429 => ProviderError::rate_limit(PROVIDER, message, None),
            503 => ProviderError::provider_unavailable(PROVIDER, message),
            _ => ProviderError::api_error(PROVIDER, status, message),
        }
    }

    /// Map a `{"error": {"code", "message", "status"}}` body
    pub fn from_api_response(response: &Value) -> ProviderError {
        let Some(error) = response.get("error") else {
            return ProviderError::api_error(PROVIDER, 500, "Unknown API error");
        };

        let code = error
            .get("code")
            .and_then(Value::as_u64)
            .and_then(|code| u16::try_from(code).ok())
            .unwrap_or(500);
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error");
        let status = error.get("status").and_then(Value::as_str).unwrap_or("");

        match (code, status) {
            (401, _) | (_, "UNAUTHENTICATED") | (403, _) | (_, "PERMISSION_DENIED") => {
                ProviderError::authentication(PROVIDER, message)
            }
            (429, _) | (_, "RESOURCE_EXHAUSTED") => {
                ProviderError::rate_limit(PROVIDER, message, Self::extract_retry_after(error))
            }
            (404, _) | (_, "NOT_FOUND") => ProviderError::model_not_found(PROVIDER, message),
            (400, _) | (_, "INVALID_ARGUMENT") | (_, "FAILED_PRECONDITION") => {
                ProviderError::invalid_request(PROVIDER, message)
            }
            (503, _) | (_, "UNAVAILABLE") => {
                ProviderError::provider_unavailable(PROVIDER, message)
            }
            _ => ProviderError::api_error(PROVIDER, code, message),
        }
    }

    /// Map a transport failure
    pub fn from_reqwest(err: &reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::timeout(PROVIDER, err.to_string())
        } else if err.is_decode() {
            ProviderError::response_parsing(PROVIDER, err.to_string())
        } else {
            ProviderError::network(PROVIDER, err.to_string())
        }
    }

    /// `RetryInfo` delay in whole seconds, e.g. `"retryDelay": "31s"`
    fn extract_retry_after(error: &Value) -> Option<u64> {
        error
            .get("details")
            .and_then(Value::as_array)?
            .iter()
            .filter_map(|detail| detail.get("retryDelay").and_then(Value::as_str))
            .find_map(|delay| delay.trim_end_matches('s').parse::<f64>().ok())
            .map(|secs| secs.ceil() as u64)
    }
}
