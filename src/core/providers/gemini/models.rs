//! Gemini model table
//!
//! Which upstream model serves each family of gateway actions.

use serde::{Deserialize, Serialize};

/// Image generation and editing model
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
/// Multimodal analysis model
pub const DEFAULT_ANALYSIS_MODEL: &str = "gemini-3-flash-preview";
/// Search-grounded chat model
pub const DEFAULT_CHAT_MODEL: &str = "gemini-3-flash-preview";
/// Low-latency text model
pub const DEFAULT_FAST_TEXT_MODEL: &str = "gemini-2.5-flash-lite-latest";

/// Per-family model identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiModels {
    /// Dance generation, image generation and image editing
    #[serde(default = "default_image_model")]
    pub image: String,
    /// Image and video analysis
    #[serde(default = "default_analysis_model")]
    pub analysis: String,
    /// Search-grounded chat
    #[serde(default = "default_chat_model")]
    pub chat: String,
    /// Fast text generation
    #[serde(default = "default_fast_text_model")]
    pub fast_text: String,
}

impl Default for GeminiModels {
    fn default() -> Self {
        Self {
            image: default_image_model(),
            analysis: default_analysis_model(),
            chat: default_chat_model(),
            fast_text: default_fast_text_model(),
        }
    }
}

impl GeminiModels {
    /// Iterate over `(family, model)` pairs
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("image", self.image.as_str()),
            ("analysis", self.analysis.as_str()),
            ("chat", self.chat.as_str()),
            ("fast_text", self.fast_text.as_str()),
        ]
    }
}

fn default_image_model() -> String {
    DEFAULT_IMAGE_MODEL.to_string()
}

fn default_analysis_model() -> String {
    DEFAULT_ANALYSIS_MODEL.to_string()
}

fn default_chat_model() -> String {
    DEFAULT_CHAT_MODEL.to_string()
}

fn default_fast_text_model() -> String {
    DEFAULT_FAST_TEXT_MODEL.to_string()
}
