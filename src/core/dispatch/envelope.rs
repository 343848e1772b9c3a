//! Wire envelopes
//!
//! Requests arrive as `{action, payload}`. Every response is exactly one of
//! `{result}` or `{error}`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::action::Action;
use crate::utils::error::{GatewayError, Result};

/// Rendering of an absent action in error messages
const UNDEFINED_ACTION: &str = "undefined";

/// Incoming `{action, payload}` envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    pub payload: Value,
}

impl Default for RequestEnvelope {
    fn default() -> Self {
        Self {
            action: None,
            payload: Value::Object(Map::new()),
        }
    }
}

impl RequestEnvelope {
    pub fn new(action: impl Into<String>, payload: Value) -> Self {
        Self {
            action: Some(action.into()),
            payload,
        }
    }

    /// Parse a raw request body, never failing
    ///
    /// An empty, non-JSON or non-object body yields the empty envelope. A
    /// non-string action is kept in its JSON rendering so that it can be
    /// reported back verbatim.
    pub fn from_body(body: &[u8]) -> Self {
        let Ok(Value::Object(mut fields)) = serde_json::from_slice::<Value>(body) else {
            return Self::default();
        };

        let action = match fields.remove("action") {
            None | Some(Value::Null) => None,
            Some(Value::String(action)) => Some(action),
            Some(other) => Some(other.to_string()),
        };
        let payload = match fields.remove("payload") {
            None | Some(Value::Null) => Value::Object(Map::new()),
            Some(payload) => payload,
        };

        Self { action, payload }
    }

    /// Action as it appears in error messages
    pub fn action_label(&self) -> &str {
        self.action.as_deref().unwrap_or(UNDEFINED_ACTION)
    }

    /// Resolve the action name against the closed set
    pub fn resolve_action(&self) -> Result<Action> {
        match self.action.as_deref() {
            Some(name) => name.parse(),
            None => Err(GatewayError::unknown_action(UNDEFINED_ACTION)),
        }
    }
}

/// Normalized result of a dispatched action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ActionOutput {
    /// `data:<mime>;base64,<data>`
    Image(String),
    Text(String),
    Grounded(GroundedAnswer),
}

impl ActionOutput {
    /// Text of a text or grounded result
    pub fn text(&self) -> Option<&str> {
        match self {
            ActionOutput::Text(text) => Some(text),
            ActionOutput::Grounded(answer) => Some(&answer.text),
            ActionOutput::Image(_) => None,
        }
    }

    pub fn into_envelope(self) -> SuccessEnvelope<ActionOutput> {
        SuccessEnvelope { result: self }
    }
}

/// Search-grounded chat answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundedAnswer {
    pub text: String,
    /// Web source URLs in encounter order, duplicates kept
    #[serde(rename = "groundingUrls", default)]
    pub grounding_urls: Vec<String>,
}

/// `{ "result": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessEnvelope<T> {
    pub result: T,
}

/// `{ "error": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
