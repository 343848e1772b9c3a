//! GrooveGen proxy client

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::config::ClientConfig;
use super::errors::{Result, SDKError};
use super::files::InlineFile;
use crate::core::dispatch::{
    ActionRequest, AnalyzeContentPayload, ChatWithSearchPayload, EditImagePayload,
    FastTextPayload, GenerateDancePayload, GenerateImagePayload, GroundedAnswer, HistoryTurn,
    ImageSize, SuccessEnvelope,
};
use crate::utils::truncate_string;

/// Client for the `/api/gemini` proxy
#[derive(Debug, Clone)]
pub struct GrooveGenClient {
    endpoint: Url,
    http_client: Client,
}

impl GrooveGenClient {
    /// Client for the gateway at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.base_url)
            .and_then(|base| base.join(&config.endpoint_path))
            .map_err(|e| {
                SDKError::ConfigError(format!("Invalid base URL '{}': {}", config.base_url, e))
            })?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let http_client = builder
            .build()
            .map_err(|e| SDKError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint,
            http_client,
        })
    }

    /// Full proxy URL
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Post one envelope and unwrap its `result`
    pub async fn call<T: DeserializeOwned>(&self, request: &ActionRequest) -> Result<T> {
        debug!(action = %request.action(), "Calling GrooveGen proxy");

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(
                action = %request.action(),
                status = status.as_u16(),
                body = %truncate_string(&body, 200),
                "Proxy request failed"
            );
            return Err(SDKError::from_error_body(&body));
        }

        let envelope: SuccessEnvelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.result)
    }

    /// Render the person in `image_base64` performing the described move
    ///
    /// Returns an image data URL.
    pub async fn generate_dance_video(
        &self,
        image_base64: impl Into<String>,
        image_mime_type: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Result<String> {
        let request = ActionRequest::from(GenerateDancePayload {
            image_base64: image_base64.into(),
            image_mime_type: image_mime_type.into(),
            prompt: prompt.into(),
        });
        self.call(&request).await
    }

    /// Text-to-image; `size` defaults to 1K
    pub async fn generate_high_quality_image(
        &self,
        prompt: impl Into<String>,
        size: Option<ImageSize>,
    ) -> Result<String> {
        let request = ActionRequest::from(GenerateImagePayload {
            prompt: prompt.into(),
            size: size.unwrap_or_default(),
        });
        self.call(&request).await
    }

    pub async fn edit_image(
        &self,
        image_base64: impl Into<String>,
        mime_type: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Result<String> {
        let request = ActionRequest::from(EditImagePayload {
            image_base64: image_base64.into(),
            mime_type: mime_type.into(),
            prompt: prompt.into(),
        });
        self.call(&request).await
    }

    /// Ask a question about an image or video; `is_video` defaults to false
    pub async fn analyze_content(
        &self,
        file_base64: impl Into<String>,
        mime_type: impl Into<String>,
        prompt: impl Into<String>,
        is_video: Option<bool>,
    ) -> Result<String> {
        let request = ActionRequest::from(AnalyzeContentPayload {
            file_base64: file_base64.into(),
            mime_type: mime_type.into(),
            prompt: prompt.into(),
            is_video: is_video.unwrap_or(false),
        });
        self.call(&request).await
    }

    /// Load a local file and analyze it
    pub async fn analyze_file<P: AsRef<Path>>(
        &self,
        path: P,
        prompt: impl Into<String>,
    ) -> Result<String> {
        let file = InlineFile::from_path(path).await?;
        let is_video = file.is_video();
        self.analyze_content(file.data, file.mime_type, prompt, Some(is_video))
            .await
    }

    /// One search-grounded chat turn
    ///
    /// `history` is the conversation before `new_message`.
    pub async fn chat_with_search(
        &self,
        history: Vec<HistoryTurn>,
        new_message: impl Into<String>,
    ) -> Result<GroundedAnswer> {
        let request = ActionRequest::from(ChatWithSearchPayload {
            history,
            new_message: new_message.into(),
        });
        self.call(&request).await
    }

    pub async fn generate_fast_text(&self, prompt: impl Into<String>) -> Result<String> {
        let request = ActionRequest::from(FastTextPayload {
            prompt: prompt.into(),
        });
        self.call(&request).await
    }

    /// Short dance prompt inspired by a pasted video link
    pub async fn suggest_dance_prompt(&self, video_link: &str) -> Result<String> {
        self.generate_fast_text(dance_suggestion_prompt(video_link))
            .await
    }
}

fn dance_suggestion_prompt(video_link: &str) -> String {
    format!(
        "A user pasted this link: \"{}\". \nCreate a short, vivid prompt (max 15 words) describing a popular dance trend. \nJust return the prompt description.",
        video_link
    )
}
