//! Configuration management for the toolbox
//!
//! Handles loading configuration from files and environment variables and
//! validates the settings. The presence of a configuration is what the
//! action service treats as "properly configured".

use crate::ToolboxError;
use crate::formulas::ToolboxVariant;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for the toolbox
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolboxConfig {
    /// Formula set exposed to scripts
    pub variant: ToolboxVariant,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ToolboxConfig {
    /// Load configuration from the default location and environment variables
    pub fn load() -> Result<Option<Self>> {
        Self::load_from_path(None)
    }

    /// Load configuration from the specified path
    ///
    /// Returns `None` when there is no configuration file, which the action
    /// service reads as "not configured". `TOOLBOX__*` environment variables
    /// override file values, e.g. `TOOLBOX__LOGGING__LEVEL=debug`.
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Option<Self>> {
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if !config_file.exists() {
            tracing::debug!("No configuration at {}", config_file.display());
            return Ok(None);
        }

        Self::load_file(&config_file).map(Some)
    }

    fn load_file(config_file: &Path) -> Result<Self> {
        let settings = Config::builder()
            .add_source(
                File::from(config_file)
                    .required(true)
                    .format(config::FileFormat::Toml),
            )
            .add_source(
                Environment::with_prefix("TOOLBOX")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| {
                format!("Failed to build configuration from {}", config_file.display())
            })?;

        let mut config: ToolboxConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("toolbox").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(ToolboxError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(ToolboxError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
