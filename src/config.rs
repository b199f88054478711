//! Configuration loading and management
//!
//! Handles parsing of optional `.tasks.toml` files in the working directory:
//!
//! ```toml
//! file = "tasks.json"
//! lock_timeout_ms = 5000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::lock::DEFAULT_LOCK_TIMEOUT_MS;

/// Name of the optional configuration file
pub const CONFIG_FILE: &str = ".tasks.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data file name, resolved against the working directory
    #[serde(default = "default_file")]
    pub file: String,

    /// Lock acquisition deadline in milliseconds
    #[serde(default = "default_lock_timeout_ms")]
    pub lock_timeout_ms: u64,
}

fn default_file() -> String {
    "tasks.json".to_string()
}

fn default_lock_timeout_ms() -> u64 {
    DEFAULT_LOCK_TIMEOUT_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: default_file(),
            lock_timeout_ms: default_lock_timeout_ms(),
        }
    }
}

impl Config {
    /// Load configuration from a `.tasks.toml` file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory, or return defaults when the
    /// file is absent. A present-but-invalid file is an error, never a
    /// silent fallback to defaults.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if self.file.trim().is_empty() {
            return Err(Error::InvalidConfig("file cannot be empty".to_string()));
        }
        if self.lock_timeout_ms == 0 {
            return Err(Error::InvalidConfig(
                "lock_timeout_ms must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
