//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\title-scout\config.toml
//! - macOS: ~/Library/Application Support/title-scout/config.toml
//! - Linux: ~/.config/title-scout/config.toml
//!
//! Every setting has a default, so a partial (or missing) file is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, ResultExt};
use crate::lookup::{CastOptions, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where pages are fetched from
    pub source: SourceConfig,

    /// Cast extraction defaults
    pub cast: CastConfig,
}

/// Upstream site settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL every page path is joined to
    pub base_url: String,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Cast extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CastConfig {
    /// Maximum number of cast entries returned
    pub limit: usize,

    /// Keep uncredited roles
    pub include_uncredited: bool,

    /// Actor pages fetched at once (1 = sequential)
    pub fetch_concurrency: usize,
}

impl Default for CastConfig {
    fn default() -> Self {
        let defaults = CastOptions::default();
        Self {
            limit: defaults.limit,
            include_uncredited: defaults.include_uncredited,
            fetch_concurrency: defaults.concurrency,
        }
    }
}

impl CastConfig {
    /// Cast options seeded from this config.
    pub fn options(&self) -> CastOptions {
        CastOptions {
            limit: self.limit,
            include_uncredited: self.include_uncredited,
            concurrency: self.fetch_concurrency.max(1),
            ..CastOptions::default()
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("title-scout"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            tracing::warn!("Using default configuration");
            Config::default()
        }
    }
}

/// Load configuration from an explicit path, failing if it can't be read.
pub fn load_from(path: &Path) -> crate::error::Result<Config> {
    let contents =
        std::fs::read_to_string(path).with_context(format!("reading config {}", path.display()))?;
    let config = toml::from_str(&contents)
        .map_err(|e| Error::config(format!("invalid config {}: {}", path.display(), e)))?;
    tracing::info!("Loaded config from {:?}", path);
    Ok(config)
}

/// Save configuration to `path`, writing atomically (temp file, then rename).
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
