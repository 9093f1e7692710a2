//! Settings file (TOML), default location `~/.config/telex/config.toml`.
//!
//! ```toml
//! inactivity_timeout_ms = 250
//! start_mode = "vietnamese"
//! normalize_on_append = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::engine::TelexEngine;
use crate::modes::InputMode;

/// Errors that can occur when loading the config
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Idle time after which the current word is dropped.
    pub inactivity_timeout_ms: u64,
    pub start_mode: InputMode,
    /// Re-place the tone after letters typed without transformation.
    pub normalize_on_append: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inactivity_timeout_ms: 250,
            start_mode: InputMode::Vietnamese,
            normalize_on_append: true,
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("config loaded from {}", path.display());
        Ok(config)
    }

    /// Loads `path` if given, else the default location if a file exists there,
    /// else the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn inactivity_timeout(&self) -> Duration {
        Duration::from_millis(self.inactivity_timeout_ms)
    }

    /// A fresh session configured from these settings.
    pub fn engine(&self) -> TelexEngine {
        let mut engine = TelexEngine::with_mode(self.start_mode);
        engine.set_normalize_on_append(self.normalize_on_append);
        engine
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("telex").join("config.toml"))
}
