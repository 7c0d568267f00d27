//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unknown settings key.
    #[error("Unknown configuration key: {0}")]
    UnknownSetting(String),

    /// Settings value rejected.
    #[error("Invalid value for {key}: {value}. {expected}")]
    InvalidSetting {
        /// Settings key.
        key: &'static str,
        /// Rejected value.
        value: String,
        /// What the key accepts.
        expected: &'static str,
    },

    /// Profile name that is neither built in nor saved.
    #[error("Unknown profile: {0}. Save or import it with `roi profile` first")]
    UnknownProfile(String),

    /// No directory to keep settings in.
    #[error("Could not determine config directory; pass --config-dir or set ROI_CONFIG_DIR")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
