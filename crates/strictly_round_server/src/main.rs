//! Strictly Round - server and one-shot evaluator.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use strictly_round_server::cli::{Cli, Command, evaluate};
use strictly_round_server::{AppState, ServerConfig, serve};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_round=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            host,
            port,
            strict,
        } => run_server(config, host, port, strict).await,
        Command::Evaluate {
            turn,
            cells,
            strict,
        } => {
            let result = evaluate(&turn, &cells, strict)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
    }
}

/// Resolves configuration (file, environment, flags) and runs the server.
#[instrument]
async fn run_server(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    strict: bool,
) -> Result<()> {
    let mut config = ServerConfig::load(config_path.as_deref())?.apply_env()?;
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }
    if strict {
        config = config.with_strict_legality(true);
    }

    info!(?config, "Starting Strictly Round server");
    serve(AppState::with_html(config)).await
}
