//! Item store selection and photo cache configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Which item store variant backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Volatile in-process list; items are lost on restart.
    #[default]
    Memory,
    /// Durable PostgreSQL table.
    Postgres,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Postgres => write!(f, "postgres"),
        }
    }
}

impl FromStr for StoreBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            other => Err(AppError::configuration(format!(
                "Unknown store backend: '{other}'. Supported: memory, postgres"
            ))),
        }
    }
}

/// Item store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store variant to use.
    #[serde(default)]
    pub backend: StoreBackend,
}

/// Photo cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding uploaded photo files.
    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,
    /// Remove a photo file once no item references it any more
    /// (after a replacement upload or after its item is deleted).
    #[serde(default = "default_true")]
    pub remove_stale_photos: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            remove_stale_photos: true,
        }
    }
}

fn default_cache_dir() -> String {
    "./cache".to_string()
}

fn default_true() -> bool {
    true
}
