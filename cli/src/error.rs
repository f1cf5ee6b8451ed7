//! Error type for the `argmap` binary.

use thiserror::Error;

/// Failures surfaced to the user as `error: ...` with exit status 1.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing to stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failure.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The requested flag has no value and no default was given.
    #[error("no value for flag: {0}")]
    MissingValue(String),
}

/// Convenience alias for results with [`CliError`].
pub type Result<T> = std::result::Result<T, CliError>;
