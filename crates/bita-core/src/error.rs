//! Core error types for bita-rs.
//!
//! [`BitaError`] covers the failures that escape a component: bad
//! configuration, serialization problems, IO, and misuse of a form while it
//! is busy. Validation and submission failures never surface here; the form
//! pipeline turns them into state.

use thiserror::Error;

/// The primary error type for bita-rs.
#[derive(Error, Debug)]
pub enum BitaError {
    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── Forms ────────────────────────────────────────────────────────

    /// A field or form mutation was attempted while a submission is in flight.
    #[error("Form '{0}' is submitting; edits are locked until it resolves")]
    FormBusy(String),

    /// The named field is not declared in the form's field table.
    #[error("Unknown field '{field}' in form '{form}'")]
    UnknownField {
        /// The form name.
        form: String,
        /// The undeclared field name.
        field: String,
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

impl BitaError {
    /// Returns `true` for errors caused by the caller rather than the environment.
    pub const fn is_usage_error(&self) -> bool {
        matches!(self, Self::FormBusy(_) | Self::UnknownField { .. })
    }
}

impl From<serde_json::Error> for BitaError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience type alias for `Result<T, BitaError>`.
pub type BitaResult<T> = Result<T, BitaError>;
