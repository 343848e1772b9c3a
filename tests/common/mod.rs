//! Common test utilities for groovegen
//!
//! - Upstream response fixtures
//! - A recording backend standing in for Gemini
//! - Envelope assertions

pub mod assertions;
pub mod fixtures;
pub mod providers;

// Re-export commonly used items
pub use assertions::EnvelopeAssertions;
pub use providers::{RecordedCall, RecordingBackend};

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}
