//! Configuration for Sombra.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::SombraResult;

/// Main configuration for Sombra.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Data file locations.
    #[serde(default)]
    pub store: StoreConfig,

    /// Matcher settings.
    #[serde(default)]
    pub matcher: MatcherConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Data file locations.
///
/// Both files must exist before a session starts; `sombra init` creates
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Answer store file, one `question|answer` entry per line.
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Banned terms file, one lowercase term per line.
    #[serde(default = "default_banned_terms_path")]
    pub banned_terms_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            banned_terms_path: default_banned_terms_path(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from(".sombra/respostas.txt")
}

fn default_banned_terms_path() -> PathBuf {
    PathBuf::from(".sombra/termos_banidos.txt")
}

/// Matcher settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Minimum fuzzy score for a candidate to be accepted (0-100, strict).
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
        }
    }
}

fn default_fuzzy_threshold() -> f64 {
    crate::matcher::DEFAULT_FUZZY_THRESHOLD
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> SombraResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> SombraResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            store: StoreConfig::default(),
            matcher: MatcherConfig::default(),
        }
    }

    /// Tries to load configuration from current directory or uses default.
    pub fn load_or_default() -> Self {
        Self::load("sombra.toml").unwrap_or_else(|_| Self::default_config())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
