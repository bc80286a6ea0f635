use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{PagesenseError, Result};
use crate::relevance::DEFAULT_MAX_SNIPPETS;

/// Global pagesense configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Wait after navigation before reading rendered content, in milliseconds.
    /// Gives dynamic pages time to settle; only applies to the JS renderer.
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,

    /// HTTP / navigation timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Default number of prompt-matching sentences to return
    #[serde(default = "default_max_snippets")]
    pub max_snippets: usize,
}

fn default_settle_ms() -> u64 {
    2000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_snippets() -> usize {
    DEFAULT_MAX_SNIPPETS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settle_ms: default_settle_ms(),
            timeout_secs: default_timeout_secs(),
            max_snippets: default_max_snippets(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "pagesense")
            .ok_or_else(|| PagesenseError::ConfigError("Could not determine config directory".into()))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Get the data directory path (holds the render script)
    pub fn data_dir() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "pagesense")
            .ok_or_else(|| PagesenseError::ConfigError("Could not determine data directory".into()))?;
        Ok(dirs.data_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.settle_ms, 2000);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_snippets, 5);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("settle_ms = 500").unwrap();
        assert_eq!(config.settle_ms, 500);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_snippets, 5);
    }
}
