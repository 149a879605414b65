//! User settings, persisted as TOML in the config directory.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::paths;

/// Display theme for the interactive session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a theme selector (case-insensitive).
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector.trim().to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Persisted user preferences.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file does
    /// not exist yet.
    pub fn load(path: &PathBuf) -> Result<Self, StorageError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|err| StorageError::io(path, err))?;
        toml::from_str(&raw).map_err(|err| StorageError::Toml(err.to_string()))
    }

    /// Load settings from the default location under the user config directory.
    pub fn load_default() -> Result<Self, StorageError> {
        Self::load(&paths::settings_file()?)
    }

    /// Write settings to `path`, creating the parent directory if needed.
    pub fn save(&self, path: &PathBuf) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| StorageError::io(parent, err))?;
        }
        let raw =
            toml::to_string_pretty(self).map_err(|err| StorageError::Toml(err.to_string()))?;
        fs::write(path, raw).map_err(|err| StorageError::io(path, err))
    }

    /// Write settings to the default location.
    pub fn save_default(&self) -> Result<(), StorageError> {
        self.save(&paths::settings_file()?)
    }
}
