//! Google Gemini Provider
//!
//! REST client for the Google AI Studio `generateContent` endpoint, used for
//! image generation and editing, multimodal analysis, search-grounded chat
//! and fast text generation.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod types;

// Re-export main types
pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::GeminiErrorMapper;
pub use models::GeminiModels;
