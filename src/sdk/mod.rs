//! GrooveGen client SDK
//!
//! Typed builders for every proxy action. Each builder encodes its inputs
//! into a `{action, payload}` envelope, posts it to `/api/gemini` and
//! unwraps the `{result}` envelope.

pub mod chat;
pub mod client;
pub mod config;
pub mod errors;
pub mod files;

// Re-exports for convenience
pub use chat::{Assistant, ChatMessage, ChatTranscript, source_hostnames};
pub use client::GrooveGenClient;
pub use config::ClientConfig;
pub use errors::{Result, SDKError};
pub use files::{InlineFile, file_to_base64, strip_data_url_prefix};

pub use crate::core::dispatch::{ChatRole, GroundedAnswer, HistoryTurn, ImageSize};

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
