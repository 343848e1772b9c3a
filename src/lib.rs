//! # GrooveGen
//!
//! Proxy gateway between the GrooveGen web client and Google Gemini.
//!
//! The browser posts `{action, payload}` envelopes to `/api/gemini`; the
//! gateway holds the API key, makes exactly one upstream call per request
//! and answers with `{result}` or `{error}`.
//!
//! ## Actions
//!
//! | action | result |
//! |---|---|
//! | `generateDanceVideo` | image data URL |
//! | `generateImage` | image data URL |
//! | `editImage` | image data URL |
//! | `analyzeContent` | text |
//! | `chatWithSearch` | `{text, groundingUrls}` |
//! | `generateFastText` | text |
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use groovegen::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/gateway.yaml").await?;
//!     let gateway = Gateway::new(config)?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Client SDK
//!
//! ```rust,no_run
//! use groovegen::sdk::GrooveGenClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GrooveGenClient::new("http://localhost:8888")?;
//!     let idea = client.generate_fast_text("A one-line dance challenge").await?;
//!     println!("{}", idea);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod sdk;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::dispatch::{Action, ActionOutput, ActionRequest, Dispatcher, RequestEnvelope};
pub use core::providers::ProviderError;
pub use core::traits::GenerativeBackend;
pub use utils::error::{GatewayError, Result};

use serde::Serialize;
use tracing::info;

/// The GrooveGen gateway service
pub struct Gateway {
    config: Config,
    server: server::server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::server::HttpServer::new(&config)?;

        Ok(Self { config, server })
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        info!("Starting GrooveGen gateway");
        info!("Configuration: {:#?}", self.config);

        self.server.start().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (unix seconds)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl BuildInfo {
    /// Information baked in by the build script
    pub fn current() -> Self {
        Self {
            version: VERSION,
            build_time: env!("GROOVEGEN_BUILD_TIME"),
            git_hash: env!("GROOVEGEN_GIT_HASH"),
            rust_version: env!("GROOVEGEN_RUST_VERSION"),
        }
    }
}
