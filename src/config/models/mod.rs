//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod gateway;
pub mod logging;
pub mod server;

// Re-export all configuration types
pub use gateway::*;
pub use logging::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8888
}

/// Default maximum body size in bytes
///
/// Uploads arrive base64-encoded inside JSON, so short video clips need room.
pub fn default_max_body_size() -> usize {
    25 * 1024 * 1024 // 25MB
}

pub fn default_log_level() -> String {
    "info".to_string()
}
