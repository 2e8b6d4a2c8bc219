//! Store configuration module.

use std::env;
use std::path::PathBuf;

/// Store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory the collection documents are written to
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `RINGSIDE_DATA_DIR`: data directory (default: `./data`)
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("RINGSIDE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
        }
    }

    /// Create a default configuration for development
    pub fn development() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::development()
    }
}
