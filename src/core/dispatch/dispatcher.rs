//! The proxy dispatcher

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::action::Action;
use super::envelope::{ActionOutput, RequestEnvelope};
use super::handlers::ActionHandler;
use super::request::ActionRequest;
use crate::config::API_KEY_ENV;
use crate::core::providers::gemini::{GeminiClient, GeminiConfig, GeminiModels};
use crate::core::traits::GenerativeBackend;
use crate::utils::error::{GatewayError, Result};
use crate::utils::logging::mask_secret;

/// Routes each envelope to exactly one upstream call
///
/// Stateless across invocations; safe to share between workers. A
/// dispatcher built without a credential rejects every request with a
/// configuration error before touching the network.
#[derive(Clone)]
pub struct Dispatcher {
    backend: Option<Arc<dyn GenerativeBackend>>,
    models: GeminiModels,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("configured", &self.is_configured())
            .field("models", &self.models)
            .finish()
    }
}

impl Dispatcher {
    pub fn new(backend: Arc<dyn GenerativeBackend>, models: GeminiModels) -> Self {
        Self {
            backend: Some(backend),
            models,
        }
    }

    /// Dispatcher with no upstream credential
    pub fn unconfigured(models: GeminiModels) -> Self {
        Self {
            backend: None,
            models,
        }
    }

    /// Build from startup configuration
    ///
    /// A blank key counts as missing.
    pub fn from_config(config: &GeminiConfig) -> Result<Self> {
        match config.api_key.as_deref().filter(|_| config.has_api_key()) {
            Some(api_key) => {
                let client = GeminiClient::new(config.clone(), api_key)?;
                info!(
                    api_key = %mask_secret(api_key),
                    base_url = %config.base_url,
                    "Gemini backend configured"
                );
                Ok(Self::new(Arc::new(client), config.models.clone()))
            }
            None => {
                warn!(
                    "{} is not set; every action will fail until it is configured",
                    API_KEY_ENV
                );
                Ok(Self::unconfigured(config.models.clone()))
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    pub fn models(&self) -> &GeminiModels {
        &self.models
    }

    /// Handle one raw envelope
    ///
    /// Checks run in a fixed order: credential, action name, payload
    /// schema. Only then is the single upstream call made.
    pub async fn dispatch(&self, envelope: RequestEnvelope) -> Result<ActionOutput> {
        let backend = self.backend()?;
        let action = envelope.resolve_action().inspect_err(|_| {
            warn!(action = envelope.action_label(), "Rejected unknown action");
        })?;
        let request = ActionRequest::decode(action, envelope.payload)?;
        self.run(backend.as_ref(), request).await
    }

    /// Handle an already decoded request
    pub async fn execute(&self, request: ActionRequest) -> Result<ActionOutput> {
        let backend = self.backend()?;
        self.run(backend.as_ref(), request).await
    }

    /// Decode and handle a payload for a known action
    pub async fn dispatch_action(&self, action: Action, payload: Value) -> Result<ActionOutput> {
        let backend = self.backend()?;
        let request = ActionRequest::decode(action, payload)?;
        self.run(backend.as_ref(), request).await
    }

    fn backend(&self) -> Result<&Arc<dyn GenerativeBackend>> {
        self.backend.as_ref().ok_or_else(|| {
            GatewayError::config(format!("{} environment variable is not set", API_KEY_ENV))
        })
    }

    async fn run(
        &self,
        backend: &dyn GenerativeBackend,
        request: ActionRequest,
    ) -> Result<ActionOutput> {
        match request {
            ActionRequest::GenerateDanceVideo(payload) => self.handle(backend, &payload).await,
            ActionRequest::GenerateImage(payload) => {
                debug!(size = %payload.size, "Requested image size");
                self.handle(backend, &payload).await
            }
            ActionRequest::EditImage(payload) => self.handle(backend, &payload).await,
            ActionRequest::AnalyzeContent(payload) => {
                debug!(is_video = payload.is_video, mime_type = %payload.mime_type, "Analyzing upload");
                self.handle(backend, &payload).await
            }
            ActionRequest::ChatWithSearch(payload) => {
                debug!(history = payload.history.len(), "Grounded chat turn");
                self.handle(backend, &payload).await
            }
            ActionRequest::GenerateFastText(payload) => self.handle(backend, &payload).await,
        }
    }

    async fn handle<P: ActionHandler>(
        &self,
        backend: &dyn GenerativeBackend,
        payload: &P,
    ) -> Result<ActionOutput> {
        let model = P::model(&self.models);
        let started = Instant::now();
        info!(action = %P::ACTION, model = model, "Dispatching action");

        let response = backend
            .generate_content(model, payload.upstream_request())
            .await
            .inspect_err(|e| {
                error!(action = %P::ACTION, model = model, error = %e, "Upstream call failed");
            })?;

        let output = P::normalize(&response).inspect_err(|e| {
            warn!(action = %P::ACTION, error = %e, "Upstream returned no usable content");
        })?;

        info!(
            action = %P::ACTION,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Action completed"
        );
        Ok(output)
    }
}
