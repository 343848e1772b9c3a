//! Scripted upstream backend
//!
//! Replays queued responses in order and records every call it receives.

use async_trait::async_trait;
use groovegen::core::providers::gemini::types::{GenerateContentRequest, GenerateContentResponse};
use groovegen::core::providers::unified_provider::ProviderError;
use groovegen::core::traits::GenerativeBackend;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One observed upstream call
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub request: GenerateContentRequest,
}

/// Backend that answers from a script
#[derive(Debug, Default)]
pub struct RecordingBackend {
    script: Mutex<VecDeque<Result<GenerateContentResponse, ProviderError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    pub fn respond(self, response: GenerateContentResponse) -> Self {
        self.script.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Queue a failure
    pub fn fail(self, error: ProviderError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerativeBackend for RecordingBackend {
    async fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: model.to_string(),
            request,
        });
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ProviderError::network("test", "no scripted response left")))
    }
}
