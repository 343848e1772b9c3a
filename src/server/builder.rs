//! Server builder and run_server function

use crate::config::Config;
use crate::core::dispatch::Dispatcher;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    dispatcher: Option<Dispatcher>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use this dispatcher instead of one built from the configuration
    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        match self.dispatcher {
            Some(dispatcher) => Ok(HttpServer::with_dispatcher(&config, dispatcher)),
            None => HttpServer::new(&config),
        }
    }
}

/// Run the server with a resolved configuration until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    let server = ServerBuilder::new().with_config(config).build()?;

    info!("Server starting at: http://{}", server.config().address());
    info!("API Endpoints:");
    info!("   POST /api/gemini - Action proxy");
    info!("   GET  /health     - Health check");
    info!("   GET  /version    - Build information");

    server.start().await
}
