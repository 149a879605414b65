use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the persistence primitives (history and settings).
///
/// Callers handle these locally: the stores log a warning and keep their
/// in-memory state authoritative rather than propagating the failure.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The platform config directory could not be resolved.
    #[error("no user config directory available")]
    NoConfigDir,

    /// IO error while reading or writing a storage file.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization error
    #[error("TOML error: {0}")]
    Toml(String),
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
