//! Environment-driven configuration.

use std::path::PathBuf;

use stockroom_inventory::{DEFAULT_DATA_FILE, DEFAULT_LOW_STOCK_THRESHOLD};

pub const DATA_FILE_ENV: &str = "STOCKROOM_DATA_FILE";
pub const LOW_STOCK_THRESHOLD_ENV: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file the inventory is loaded from and saved to.
    pub data_file: PathBuf,
    /// Items strictly below this quantity are reported as low.
    pub low_stock_threshold: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank keys keep their
    /// defaults; unparsable values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(DATA_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            config.data_file = PathBuf::from(path);
        }

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_ENV).filter(|v| !v.trim().is_empty()) {
            match raw.trim().parse::<u64>() {
                Ok(threshold) => config.low_stock_threshold = threshold,
                Err(e) => tracing::warn!(
                    "{LOW_STOCK_THRESHOLD_ENV}={raw:?} is not a non-negative integer ({e}); \
                     using {}",
                    config.low_stock_threshold
                ),
            }
        }

        config
    }
}
