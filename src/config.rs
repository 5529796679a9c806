use crate::error::ConfigError;
use crate::search::{ContextPolicy, DEFAULT_CONTEXT_WIDTH, MAX_CONTEXT_WIDTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    pub context: ContextConfig,
    pub limits: LimitsConfig,
}

/// Context snippet configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ContextConfig {
    /// Characters captured on each side of a match when none is requested
    pub default_width: usize,
    /// Largest accepted width; anything above falls back to the default
    pub max_width: usize,
}

/// Input limits enforced before a scan starts
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LimitsConfig {
    /// Maximum combined size of the files in the scanned directory (in bytes)
    pub max_total_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            context: ContextConfig {
                default_width: DEFAULT_CONTEXT_WIDTH,
                max_width: MAX_CONTEXT_WIDTH,
            },
            limits: LimitsConfig {
                max_total_bytes: 32 * 1024 * 1024,
            },
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "docscan")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location, or return defaults
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_or_default(&path),
            _ => Config::default(),
        }
    }

    /// Load configuration from `path`, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using default configuration");
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str::<Config>(&contents)?)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Write a default config file at `path` unless one already exists.
    /// Returns whether a file was written.
    pub fn create_default_at(path: &Path) -> Result<bool, ConfigError> {
        if path.exists() {
            return Ok(false);
        }
        Config::default().save_to(path)?;
        Ok(true)
    }

    pub fn context_policy(&self) -> ContextPolicy {
        ContextPolicy {
            default_width: self.context.default_width,
            max_width: self.context.max_width,
        }
    }
}
