use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading store configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    /// Configuration file is not valid JSON or has unknown fields.
    #[error("Invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Key separator is empty or could blend into the timestamp.
    #[error("Invalid key separator '{0}': must be non-empty with no digits or '-'")]
    InvalidSeparator(String),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
