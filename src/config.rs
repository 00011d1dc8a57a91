//! Configuration management for pagelist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_LOG_LEVEL, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZES,
    LOG_FILE_NAME, LOG_LEVELS, MAX_PAGE_SIZE,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub paging: PagingConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

/// Paging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    /// Items per page
    pub page_size: usize,
    /// Options offered by the per-page selector; must contain `page_size`
    pub page_sizes: Vec<usize>,
}

/// How records read by the `pagelist` binary are identified and ordered
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Field holding the record identifier; the record index is used when absent
    pub id_field: String,
    /// Field to sort by (empty = keep input order)
    pub sort_field: String,
    /// Sort direction
    pub ascending: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file
    pub enabled: bool,
    /// One of "error", "warn", "info", "debug", "trace"
    pub level: String,
    /// Log file path (empty = pagelist.log in the data directory)
    pub file: String,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            id_field: "id".to_string(),
            sort_field: String::new(),
            ascending: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: String::new(),
        }
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
        let paging = &self.paging;
        if paging.page_size == 0 || paging.page_size > MAX_PAGE_SIZE {
            anyhow::bail!(
                "page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE,
                paging.page_size
            );
        }

        if paging.page_sizes.is_empty() {
            anyhow::bail!("page_sizes cannot be empty");
        }

        if let Some(size) = paging.page_sizes.iter().find(|size| **size == 0 || **size > MAX_PAGE_SIZE) {
            anyhow::bail!("page_sizes entries must be between 1 and {}, got {}", MAX_PAGE_SIZE, size);
        }

        if !paging.page_sizes.contains(&paging.page_size) {
            anyhow::bail!(
                "page_size {} is not one of page_sizes [{}]",
                paging.page_size,
                paging
                    .page_sizes
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            );
        }

        Ok(())
    }

    /// Resolved log file path
    pub fn log_file_path(&self) -> Result<PathBuf> {
        if !self.logging.file.is_empty() {
            return Ok(PathBuf::from(&self.logging.file));
        }
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(LOG_FILE_NAME))
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# pagelist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
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
}
