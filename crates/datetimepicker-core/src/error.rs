//! Core error types for datetimepicker-rs.
//!
//! The format translator itself never fails. Errors come from the layers
//! around it: building a mapping from caller-supplied vocabularies, loading
//! settings, and parsing option values.

use thiserror::Error;

/// The primary error type for datetimepicker-rs.
///
/// Each variant maps to a process exit code via [`PickerError::exit_code`],
/// which the command-line front end uses when a command fails.
#[derive(Error, Debug)]
pub enum PickerError {
    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The integration is improperly configured.
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    // ── Format data ──────────────────────────────────────────────────

    /// Two vocabularies cannot be paired into a mapping.
    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    /// A picker option holds a value that cannot be interpreted.
    #[error("Invalid option `{key}`: {message}")]
    InvalidOption {
        /// The option key.
        key: String,
        /// What was wrong with the value.
        message: String,
    },

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PickerError {
    /// Creates an [`PickerError::InvalidOption`] for the given key.
    pub fn invalid_option(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Returns the process exit code associated with this error.
    ///
    /// - `ConfigurationError`, `ImproperlyConfigured` -> 78 (`EX_CONFIG`)
    /// - `InvalidVocabulary`, `InvalidOption` -> 65 (`EX_DATAERR`)
    /// - `SerializationError` -> 70 (`EX_SOFTWARE`)
    /// - `IoError` -> 74 (`EX_IOERR`)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigurationError(_) | Self::ImproperlyConfigured(_) => 78,
            Self::InvalidVocabulary(_) | Self::InvalidOption { .. } => 65,
            Self::SerializationError(_) => 70,
            Self::IoError(_) => 74,
        }
    }
}

impl From<serde_json::Error> for PickerError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience type alias for `Result<T, PickerError>`.
pub type PickerResult<T> = Result<T, PickerError>;
