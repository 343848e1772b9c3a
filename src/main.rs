//! GrooveGen - Gemini proxy gateway
//!
//! Serves `/api/gemini` for the GrooveGen web client.

#![allow(missing_docs)]

use anyhow::Context;
use clap::Parser;
use groovegen::Config;
use groovegen::server::builder::run_server;
use groovegen::utils::logging::init_tracing;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "groovegen", version, about = "GrooveGen Gemini proxy gateway")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "GROOVEGEN_CONFIG", default_value = "config/gateway.yaml")]
    config: PathBuf,

    /// Bind host, overrides configuration and environment
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overrides configuration and environment
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(&cli.config)
        .await
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;

    if let Some(host) = cli.host {
        config.gateway.server.host = host;
    }
    if let Some(port) = cli.port {
        config.gateway.server.port = port;
    }
    config.validate()?;

    init_tracing(config.logging()).map_err(anyhow::Error::msg)?;
    info!(version = groovegen::VERSION, "Starting GrooveGen gateway");

    run_server(config).await.context("gateway terminated")?;
    Ok(())
}
