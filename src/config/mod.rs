//! Configuration management
//!
//! This module handles loading configuration from an optional TOML
//! file and merging it with CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::constants::timeouts;
use crate::core::error::{Result, StatusOfError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Total timeout in seconds for each request
    pub timeout: Option<u64>,

    /// Prepend https:// instead of http:// to URLs without a scheme
    pub secure: Option<bool>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Force styling on or off; detected from the terminal when unset
    pub color: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            secure: Some(false),
            verbose: Some(false),
            color: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            StatusOfError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            StatusOfError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if cli_config.secure {
            self.secure = Some(true);
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if cli_config.no_color {
            self.color = Some(false);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout
            && timeout < timeouts::MIN_TIMEOUT_SECONDS
        {
            return Err(StatusOfError::Config(format!(
                "Timeout must be at least {} second(s), got {timeout}",
                timeouts::MIN_TIMEOUT_SECONDS
            )));
        }
        Ok(())
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn is_secure(&self) -> bool {
        self.secure.unwrap_or(false)
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }
}

/// Settings coming straight from the command line
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub timeout: Option<u64>,
    pub secure: bool,
    pub verbose: bool,
    pub no_color: bool,
    pub config_file: Option<String>,
}

/// Load the config file named on the command line (or defaults) and apply CLI overrides
pub fn load_and_merge(cli_config: &CliConfig) -> Result<Config> {
    let mut config = match cli_config.config_file {
        Some(ref path) => Config::load_from_file(path)?,
        None => Config::default(),
    };

    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
