//! Search-grounded assistant session
//!
//! The transcript lives in memory for the lifetime of the session and is
//! never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;
use uuid::Uuid;

use super::client::GrooveGenClient;
use crate::core::dispatch::{ChatRole, HistoryTurn};

/// Opening message of every transcript
pub const GREETING: &str =
    "Hello! I can help you find information using Google Search. What do you need?";

/// Reply appended when a turn fails
pub const ERROR_REPLY: &str = "Sorry, I encountered an error.";

/// One transcript entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grounding_urls: Option<Vec<String>>,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            grounding_urls: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_grounding_urls(mut self, urls: Vec<String>) -> Self {
        self.grounding_urls = Some(urls);
        self
    }

    /// Source hostnames for display
    pub fn sources(&self) -> Vec<String> {
        self.grounding_urls
            .as_deref()
            .map(source_hostnames)
            .unwrap_or_default()
    }
}

/// Append-only conversation, in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatTranscript {
    /// Transcript opened by the assistant's greeting
    pub fn new() -> Self {
        let greeting = ChatMessage {
            id: "1".to_string(),
            ..ChatMessage::new(ChatRole::Model, GREETING)
        };
        Self {
            messages: vec![greeting],
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Every message as an upstream history turn
    pub fn history(&self) -> Vec<HistoryTurn> {
        self.messages
            .iter()
            .map(|m| HistoryTurn::new(m.role, m.text.clone()))
            .collect()
    }
}

/// Chat session against the proxy
#[derive(Debug, Clone)]
pub struct Assistant {
    client: GrooveGenClient,
    transcript: ChatTranscript,
}

impl Assistant {
    pub fn new(client: GrooveGenClient) -> Self {
        Self {
            client,
            transcript: ChatTranscript::new(),
        }
    }

    pub fn transcript(&self) -> &ChatTranscript {
        &self.transcript
    }

    /// Send one user message and append the reply
    ///
    /// Blank input is ignored and returns `None`. A failed turn appends
    /// [`ERROR_REPLY`] instead of the model's answer.
    pub async fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        let history = self.transcript.history();
        self.transcript.push(ChatMessage::new(ChatRole::User, text));

        let reply = match self.client.chat_with_search(history, text).await {
            Ok(answer) => ChatMessage::new(ChatRole::Model, answer.text)
                .with_grounding_urls(answer.grounding_urls),
            Err(e) => {
                warn!(error = %e, "Chat turn failed");
                ChatMessage::new(ChatRole::Model, ERROR_REPLY)
            }
        };
        self.transcript.push(reply);
        self.transcript.last()
    }
}

/// Hostnames of grounding URLs, in order
///
/// URLs that do not parse or have no host are shown as given.
pub fn source_hostnames(urls: &[String]) -> Vec<String> {
    urls.iter()
        .map(|raw| {
            Url::parse(raw)
                .ok()
                .and_then(|url| url.host_str().map(str::to_string))
                .unwrap_or_else(|| raw.clone())
        })
        .collect()
}
