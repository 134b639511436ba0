//! Configuration management for callgrid.
//!
//! This crate provides configuration loading and saving with TOML
//! format and XDG directory conventions. Missing keys are filled in
//! with defaults and written back, so the on-disk file always shows
//! the full set of settings.

mod settings;
mod xdg;

pub use settings::{Config, GeneralSettings, LoggingSettings, WorkspaceSettings};
pub use xdg::{get_cache_dir, get_config_dir, get_data_dir};

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const THEME_NAME: &str = "dark";
    pub const SPLIT_DIRECTION: &str = "horizontal";
    pub const MIN_PANEL_WIDTH: u16 = 20;
    pub const MIN_LOG_LEVEL: &str = "info";
    pub const RESOURCE_MONITOR_INTERVAL: u64 = 1000;
    pub const MAX_LOG_ENTRIES: usize = 200;
}

impl Config {
    /// Load configuration from file.
    ///
    /// On first run, creates config file with default values.
    /// Auto-completes missing keys with default values.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Get path to log file.
    ///
    /// If specified in config, use it; otherwise use the XDG cache
    /// directory.
    pub fn log_file_path(&self) -> PathBuf {
        if let Some(ref path) = self.logging.file_path {
            PathBuf::from(path)
        } else {
            get_cache_dir()
                .map(|dir| dir.join("callgrid.log"))
                .unwrap_or_else(|_| std::env::temp_dir().join("callgrid.log"))
        }
    }

    fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let original_content = std::fs::read_to_string(config_path)?;
            let config: Self = toml::from_str(&original_content)?;

            // Serialize back to get normalized content
            let normalized_content = toml::to_string_pretty(&config)?;

            // If content changed, save the updated config
            if original_content != normalized_content {
                config.save_to(config_path)?;
            }

            Ok(config)
        } else {
            // First run - create config file with default values
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }
}
