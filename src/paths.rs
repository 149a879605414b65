//! Resolution of the on-disk locations zcalc persists to.
//!
//! Everything lives under `<config>/zcalc/` (e.g. `~/.config/zcalc/` on
//! Linux): `history.json` for the calculation log and `config.toml` for
//! user settings.

use crate::error::StorageError;
use std::path::PathBuf;

const APP_DIR: &str = "zcalc";

/// Directory holding all persisted state, created on demand by the stores.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or(StorageError::NoConfigDir)
}

/// Location of the persisted calculation history.
pub fn history_file() -> Result<PathBuf, StorageError> {
    Ok(data_dir()?.join("history.json"))
}

/// Location of the persisted user settings.
pub fn settings_file() -> Result<PathBuf, StorageError> {
    Ok(data_dir()?.join("config.toml"))
}
