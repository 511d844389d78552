// Configuration for the namesplit engine and UI components
// Every field has a documented default; a config file only overrides what it names

use super::error::ConfigError;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "NAMESPLIT_CONFIG";

/// Pipeline options supplied by the caller on every split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SplitOptions {
    /// Collapse repeated names, ASCII case-insensitive (default true)
    pub deduplicate: bool,

    /// Normalize whitespace inside each segmented chunk (default true)
    pub trim_whitespace: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            deduplicate: true,
            trim_whitespace: true,
        }
    }
}

/// Front-end behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Copy the result to the clipboard after each split (default true)
    pub auto_copy: bool,

    /// Run a split as soon as text is pasted (default true)
    pub split_on_paste: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            auto_copy: true,
            split_on_paste: true,
        }
    }
}

/// Master configuration combining all namesplit settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub split: SplitOptions,
    pub ui: UiConfig,
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Explicit path first, then `NAMESPLIT_CONFIG`, then defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));

        match path {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}
