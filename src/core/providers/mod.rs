//! Upstream provider implementations
//!
//! GrooveGen talks to a single upstream, Google Gemini.

pub mod gemini;
pub mod unified_provider;

// Export main types
pub use unified_provider::ProviderError;
