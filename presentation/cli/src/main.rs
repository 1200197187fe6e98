use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod config;
mod setup;

use cli::Cli;
use config::app_config::AppConfig;
use setup::runner::Runner;

/// Batch entry point
///
/// Reads the inspection sheet, generates and judges one RSL rule per row and writes the
/// enriched sheet back out.
/// - config/: paths, OpenAI, validation and pacing settings
/// - setup/: dependency wiring, the operator prompt and the batch runner
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // 1. Load environment variables, so RUST_LOG may come from .env too
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_cli(Cli::parse());

    // 4. Wire dependencies and run the batch
    Runner::run(config).await
}
