//! Happydash Server
//!
//! Entry point for the dashboard service. Loads configuration, reads the two
//! source CSV files into memory and serves the dashboard. A load failure is
//! fatal: the server never comes up with a partial dataset.
//!
//! Run with: cargo run -- --happiness-file world-happiness-report.csv --codes-file code.csv
//!
//! # Configuration
//!
//! Flags override environment variables, which override the config file:
//! - `--config`: Path to a TOML config file
//! - `--happiness-file` / `HAPPYDASH_HAPPINESS_PATH`
//! - `--codes-file` / `HAPPYDASH_CODES_PATH`
//! - `--debug`: Force debug-level logging
//! - `RUST_LOG`: Fine-grained log filter (overrides everything)

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use happydash::api::{serve, ApiConfig, AppState};
use happydash::config::Config;
use happydash::dataset::Dataset;

/// World Happiness Dashboard server
#[derive(Debug, Parser)]
#[command(name = "happydash", version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// World happiness report CSV (overrides config)
    #[arg(long)]
    happiness_file: Option<PathBuf>,

    /// Country-code lookup CSV (overrides config)
    #[arg(long)]
    codes_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Resolve configuration before logging so the log level applies
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };
    if let Some(path) = &cli.happiness_file {
        config.data.happiness_path = path.display().to_string();
    }
    if let Some(path) = &cli.codes_file {
        config.data.codes_path = path.display().to_string();
    }

    init_tracing(&config, cli.debug);

    tracing::info!("Starting Happydash v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        happiness = %config.data.happiness_path,
        codes = %config.data.codes_path,
        "Loading dataset"
    );

    // Fatal on a missing or malformed source file
    let dataset = Dataset::load(
        Path::new(&config.data.happiness_path),
        Path::new(&config.data.codes_path),
    )
    .context("loading dataset; the server will not start with a partial dataset")?;

    let years = dataset.happiness.distinct_years();
    tracing::info!(
        rows = dataset.happiness.len(),
        countries = dataset.codes.len(),
        first_year = ?years.first(),
        last_year = ?years.last(),
        "Dataset resident"
    );

    let api_config = ApiConfig::new(config.api.host.clone(), config.api.port);
    let state = AppState::new(Arc::new(dataset), api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Happydash stopped");
    Ok(())
}

/// Initialize the tracing subscriber from config and the --debug flag
fn init_tracing(config: &Config, debug: bool) {
    let default_filter = if debug {
        "happydash=debug,tower_http=debug".to_string()
    } else {
        format!("happydash={}", config.logging.level)
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
