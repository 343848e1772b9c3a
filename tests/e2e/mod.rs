//! End-to-end tests for groovegen
//!
//! These tests call the real Gemini API.
//! Run with: cargo test -- --ignored
//!
//! Required environment variables:
//! - GEMINI_API_KEY
