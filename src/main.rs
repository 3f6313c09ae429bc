//! Inventory Server
//!
//! Main entry point that wires all crates together and starts the server.

mod cli;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use inventory_core::config::AppConfig;
use inventory_core::error::AppError;
use inventory_database::StoreManager;

use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment, then apply CLI flags.
fn load_configuration(cli: &Cli) -> Result<AppConfig, AppError> {
    let path = cli
        .config
        .clone()
        .or_else(|| std::env::var("INVENTORY_CONFIG").ok());

    let mut config = AppConfig::load(path.as_deref())?;
    cli.apply_to(&mut config);
    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Connect the configured store and serve until shutdown.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.server.host,
        port = config.server.port,
        store = %config.store.backend,
        cache_dir = %config.storage.cache_dir,
        "Starting inventory server"
    );

    let store = StoreManager::new(&config.store, &config.database).await?;
    tracing::info!(store = %config.store.backend, "Item store ready");

    inventory_api::run_server(config, store).await
}
