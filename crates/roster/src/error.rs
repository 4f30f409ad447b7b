//! Error types for roster.
//!
//! Two layers live here: [`RosterError`] describes why a roster operation
//! rejected its input and is always reported through an
//! [`Outcome`](crate::Outcome), while [`Error`] covers the failures of the
//! surrounding application (configuration, serialization, I/O).

use thiserror::Error;

/// Why a roster operation refused to act.
///
/// The `Display` text of each variant is the message carried by the failed
/// [`Outcome`](crate::Outcome).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterError {
    /// A student with the same id is already stored.
    #[error("ID already exists")]
    DuplicateId,

    /// The age is outside the accepted range.
    #[error("Invalid age")]
    InvalidAge,

    /// The gpa is outside the accepted range.
    #[error("Invalid average")]
    InvalidAverage,

    /// No stored student has the requested id.
    #[error("Student not found")]
    NotFound,
}

/// The main error type for roster application operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for roster application operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error came from configuration loading or validation.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigLoad(_) | Self::ConfigValidation { .. })
    }
}
