//! Gemini Client
//!
//! Thin `generateContent` client for Google AI Studio. One request per call,
//! no retries. No timeout is applied unless one is configured.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, Response};
use serde_json::Value;
use tracing::debug;

use super::config::GeminiConfig;
use super::error::{GeminiErrorMapper, PROVIDER};
use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::GenerativeBackend;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: Client,
    headers: HeaderMap,
}

impl GeminiClient {
    /// Create a client authenticated with the given key
    pub fn new(config: GeminiConfig, api_key: &str) -> Result<Self, ProviderError> {
        let mut builder = ClientBuilder::new();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| {
                ProviderError::network(PROVIDER, format!("Failed to create HTTP client: {}", e))
            })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut key = HeaderValue::from_str(api_key).map_err(|e| {
            ProviderError::authentication(PROVIDER, format!("Invalid API key format: {}", e))
        })?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);

        Ok(Self {
            config,
            http_client,
            headers,
        })
    }

    /// Client configuration
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Handle
    async fn handle_response(
        &self,
        response: Response,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| GeminiErrorMapper::from_reqwest(&e))?;

        debug!(status = %status, bytes = response_text.len(), "Gemini response received");

        if !status.is_success() {
            return Err(GeminiErrorMapper::from_http_status(
                status.as_u16(),
                &response_text,
            ));
        }

        let json_response: Value = serde_json::from_str(&response_text).map_err(|e| {
            ProviderError::response_parsing(PROVIDER, format!("Invalid JSON: {}", e))
        })?;

        // A 2xx can still carry an error object.
        if json_response.get("error").is_some() {
            return Err(GeminiErrorMapper::from_api_response(&json_response));
        }

        serde_json::from_value(json_response)
            .map_err(|e| ProviderError::response_parsing(PROVIDER, e.to_string()))
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let url = self.config.generate_content_url(model);
        debug!(model = model, url = %url, "Sending Gemini generateContent request");

        let response = self
            .http_client
            .post(&url)
            .headers(self.headers.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| GeminiErrorMapper::from_reqwest(&e))?;

        self.handle_response(response).await
    }
}
