//! Error types for buildstamp core

use thiserror::Error;

/// Core error types
#[derive(Error, Debug)]
pub enum StampError {
    #[error("Failed to read stamp file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid stamp file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid build date {date:?}: {source}")]
    InvalidDate {
        date: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Version provider already installed")]
    AlreadyInstalled,
}

/// Result type for buildstamp core operations
pub type Result<T> = std::result::Result<T, StampError>;
