//! Per-action payload schemas
//!
//! Wire field names are camelCase. Advisory fields carry defaults so that
//! older clients which omit them still validate.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// `generateDanceVideo`: reference photo plus a dance description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDancePayload {
    pub image_base64: String,
    pub image_mime_type: String,
    pub prompt: String,
}

/// `generateImage`: text-to-image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImagePayload {
    pub prompt: String,
    /// Advisory only; not forwarded upstream
    #[serde(default, deserialize_with = "lenient_size")]
    pub size: ImageSize,
}

/// Requested output resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageSize {
    #[default]
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

impl ImageSize {
    /// Parse a wire name, `None` for anything outside `1K`/`2K`/`4K`
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "1K" => Some(ImageSize::OneK),
            "2K" => Some(ImageSize::TwoK),
            "4K" => Some(ImageSize::FourK),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::OneK => "1K",
            ImageSize::TwoK => "2K",
            ImageSize::FourK => "4K",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Advisory fields never fail a request: unknown values fall back to the default.
fn lenient_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ImageSize, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(ImageSize::from_wire)
        .unwrap_or_default())
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Value::as_bool).unwrap_or(false))
}

/// `editImage`: source image plus an edit instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditImagePayload {
    pub image_base64: String,
    pub mime_type: String,
    pub prompt: String,
}

/// `analyzeContent`: image or video plus a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeContentPayload {
    pub file_base64: String,
    pub mime_type: String,
    pub prompt: String,
    /// Advisory only; the MIME type already tells the model what it gets
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_video: bool,
}

/// `chatWithSearch`: prior turns plus the new user message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatWithSearchPayload {
    #[serde(default)]
    pub history: Vec<HistoryTurn>,
    pub new_message: String,
}

/// One prior conversation turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub role: ChatRole,
    pub text: String,
}

impl HistoryTurn {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// Conversation role, named as the upstream names it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// `generateFastText`: short low-latency completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastTextPayload {
    pub prompt: String,
}
