//! Utility modules for the GrooveGen gateway
//!
//! - **error**: Gateway error type and its HTTP envelope mapping
//! - **logging**: Tracing subscriber setup and log-safe formatting

pub mod error; // Error handling
pub mod logging; // Logging & monitoring

use uuid::Uuid;

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Truncate string to specified length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
