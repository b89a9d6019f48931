//! Configuration management for qwerty-walk
//!
//! Settings are read from a platform-specific config file when present.
//! Command-line flags override whatever the file says.
//!
//! ## Config File Locations
//!
//! | Platform | Path |
//! |----------|------|
//! | Linux | `~/.config/qwerty-walk/config.toml` |
//! | macOS | `~/Library/Application Support/qwerty-walk/config.toml` |
//! | Windows | `%APPDATA%\qwerty-walk\config.toml` |
//!
//! ## Example
//!
//! ```no_run
//! use qwerty_walk::Config;
//!
//! // Load existing config or use defaults
//! let mut config = Config::load().unwrap_or_default();
//!
//! // Modify settings
//! config.output.color = false;
//!
//! // Save to disk
//! config.save().expect("Failed to save config");
//! ```

use crate::output::OutputFormat;
use crate::scan::ScanOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Word list used when none is configured or given on the command line
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

/// Error type for configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to determine config directory
    #[error("Could not determine config directory")]
    NoConfigDir,
    /// IO error reading or writing config file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Failed to parse config file
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize config
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Directory holding the config file
fn config_dir() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("qwerty-walk"))
}

/// Returns the path to the config file.
///
/// The directory is not created; see [`Config::save`].
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Word source settings
    #[serde(default)]
    pub scan: ScanConfig,
    /// Console output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Word source configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScanConfig {
    /// Word list to read, one word per line
    pub dictionary: PathBuf,
    /// Reject words containing apostrophes, hyphens and other non-letters
    pub letters_only: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            letters_only: true,
        }
    }
}

/// Console output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Colorize statistics
    pub color: bool,
    /// Print every typeable word before the statistics
    pub list_matches: bool,
    /// Output format
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            list_matches: true,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path()?;

        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), ConfigError> {
        let dir = config_dir()?;
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        self.save_to(&dir.join("config.toml"))
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Scanner options implied by this configuration
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            letters_only: self.scan.letters_only,
            collect_matches: self.output.format == OutputFormat::Json,
            explain: false,
        }
    }
}
