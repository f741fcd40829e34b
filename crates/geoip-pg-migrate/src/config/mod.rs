//! Configuration loading and validation.

mod types;
mod validation;

pub use types::*;

use crate::error::{MigrateError, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration file location.
pub const CONFIG_FILE_ENV: &str = "CONFIG_FILE";

impl Config {
    /// Resolve the configuration file path.
    ///
    /// Uses the `CONFIG_FILE` environment variable when set, otherwise
    /// `~/.db4s/status_updater.toml`.
    pub fn locate() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_FILE_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        let home = dirs::home_dir().ok_or_else(|| {
            MigrateError::Config("user home directory couldn't be determined".into())
        })?;
        Ok(home.join(".db4s").join("status_updater.toml"))
    }

    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Config = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }
}
