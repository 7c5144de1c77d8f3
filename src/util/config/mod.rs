//! classmodel configuration system
//!
//! Supports user-level and project-level configuration.
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments (--config, --verbose)
//! 2. Project-level (./classmodel.toml)
//! 3. User-level (~/.config/classmodel/config.toml)
//! 4. Default values
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use classmodel::util::config::load_config;
//!
//! let config = load_config(None).unwrap();
//! assert!(config.parser.queue_capacity >= 1);
//! ```

use crate::util::logger::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the project-level configuration file
pub const PROJECT_CONFIG_FILE: &str = "classmodel.toml";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Parser settings
    #[serde(default)]
    pub parser: ParserConfig,
    /// Diagnostic output settings
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Batch check settings
    #[serde(default)]
    pub check: CheckConfig,
}

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Capacity of the bounded queue between tokenizer and parser
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

fn default_queue_capacity() -> usize {
    16
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            queue_capacity: default_queue_capacity(),
        }
    }
}

/// Diagnostics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Colour the error header printed by the CLI
    #[serde(default = "default_colors")]
    pub colors: bool,
}

fn default_colors() -> bool {
    true
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            colors: default_colors(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Minimum level written to stderr
    #[serde(default)]
    pub level: LogLevel,
}

/// Batch check configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// File extension collected when walking directories
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_extension() -> String {
    "model".to_string()
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.parser.queue_capacity == 0 {
            return Err(ConfigError::Invalid(
                "parser.queue_capacity must be at least 1".to_string(),
            ));
        }
        if self.check.extension.is_empty() || self.check.extension.starts_with('.') {
            return Err(ConfigError::Invalid(format!(
                "check.extension must be a bare extension: {:?}",
                self.check.extension
            )));
        }
        Ok(self)
    }
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    // Try XDG config directory on Unix
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join("classmodel"));
    }

    // Fallback to ~/.config/classmodel
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("classmodel"));
    }

    // On Windows, try %APPDATA%
    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("classmodel"));
    }

    None
}

/// Get the user config file path (~/.config/classmodel/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Load a configuration file
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_toml(&content)
}

/// Load the effective configuration.
///
/// An explicit path wins; otherwise the project file in the current
/// directory, then the user file, then the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    let project = PathBuf::from(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return load_config_file(&project);
    }

    match get_config_path() {
        Some(path) if path.is_file() => load_config_file(&path),
        _ => Ok(Config::default()),
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
