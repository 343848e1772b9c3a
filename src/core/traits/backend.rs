//! Generative backend trait
//!
//! The seam between the dispatcher and the upstream model service. The
//! production implementation is [`GeminiClient`]; tests substitute a mock.
//!
//! [`GeminiClient`]: crate::core::providers::gemini::GeminiClient

use async_trait::async_trait;

use crate::core::providers::gemini::types::{GenerateContentRequest, GenerateContentResponse};
use crate::core::providers::unified_provider::ProviderError;

/// Upstream generative model service
///
/// Implementations issue exactly one upstream call per invocation and never
/// retry; every error is terminal for the request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Run `generateContent` against the given model
    async fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError>;
}
