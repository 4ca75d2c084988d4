//! Error type shared by the sentinel library.

use std::path::PathBuf;

use dashboard_leptos::theme::ThemeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentinelError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid status snapshot {}: {source}", path.display())]
    Status {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid timestamp `{0}` (expected YYYY-MM-DD HH:MM:SS)")]
    Timestamp(String),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),
}

pub type Result<T> = std::result::Result<T, SentinelError>;
