//! Command-line arguments.

use clap::{ArgAction, Parser};

use inventory_core::config::{AppConfig, StoreBackend};

/// Inventory service: items with photos over HTTP.
///
/// `-h` selects the host, so help is only available as `--help`.
#[derive(Debug, Parser)]
#[command(name = "inventory-server", version, about, long_about = None, disable_help_flag = true)]
pub struct Cli {
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Host to bind
    #[arg(short = 'h', long)]
    pub host: String,

    /// Port to bind
    #[arg(short, long)]
    pub port: u16,

    /// Photo cache directory (created if missing)
    #[arg(short, long)]
    pub cache: String,

    /// Path to an optional TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Item store variant: memory or postgres
    #[arg(long)]
    pub store: Option<StoreBackend>,

    /// PostgreSQL connection URL
    #[arg(long)]
    pub database_url: Option<String>,

    /// Public base URL for photo links
    #[arg(long)]
    pub public_url: Option<String>,
}

impl Cli {
    /// Apply command-line values on top of file and environment values.
    pub fn apply_to(&self, config: &mut AppConfig) {
        config.server.host = self.host.clone();
        config.server.port = self.port;
        config.storage.cache_dir = self.cache.clone();

        if let Some(store) = self.store {
            config.store.backend = store;
        }
        if let Some(url) = &self.database_url {
            config.database.url = url.clone();
        }
        if let Some(url) = &self.public_url {
            config.server.public_url = Some(url.clone());
        }
    }
}
