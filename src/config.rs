//! Configuration management for chatclock
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DATE_FORMAT, DEFAULT_AM_LABEL, DEFAULT_PM_LABEL,
    DEFAULT_WEEKDAY_NAMES, MAX_UTC_OFFSET_MINUTES,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub clock: ClockConfig,
    pub logging: LoggingConfig,
}

/// Clock configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Fixed offset from UTC in minutes (e.g. 480 for GMT+8).
    /// Leave unset to follow the system time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,
    /// Weekday names, Sunday first
    pub weekday_names: Vec<String>,
    /// Label shown before noon
    pub am_label: String,
    /// Label shown from noon on
    pub pm_label: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Write to the log file in the data directory instead of stderr
    pub to_file: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: None,
            weekday_names: DEFAULT_WEEKDAY_NAMES.iter().map(|s| s.to_string()).collect(),
            am_label: DEFAULT_AM_LABEL.to_string(),
            pm_label: DEFAULT_PM_LABEL.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "warn".to_string(),
            to_file: false,
        }
    }
}

impl LoggingConfig {
    /// Parsed minimum level
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(CONFIG_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(minutes) = self.clock.utc_offset_minutes {
            if !(-MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&minutes) {
                anyhow::bail!(
                    "utc_offset_minutes must be between {} and {}, got {}",
                    -MAX_UTC_OFFSET_MINUTES,
                    MAX_UTC_OFFSET_MINUTES,
                    minutes
                );
            }
        }

        if self.clock.weekday_names.len() != 7 {
            anyhow::bail!(
                "weekday_names must list 7 days starting with Sunday, got {}",
                self.clock.weekday_names.len()
            );
        }

        if self.clock.am_label.is_empty() || self.clock.pm_label.is_empty() {
            anyhow::bail!("am_label and pm_label cannot be empty");
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# chatclock Configuration File\n# Generated on {}\n# Set clock.utc_offset_minutes (e.g. 480) to pin a fixed zone.\n\n",
            chrono::Local::now().format(DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
