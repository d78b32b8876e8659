//! Error taxonomy of the form pipeline.
//!
//! None of these escape [`FormPipeline::submit`](crate::pipeline::FormPipeline::submit):
//! field errors land in the form's error map and submission errors turn into
//! a `Failed` status plus an error notice.

use std::time::Duration;

use thiserror::Error;

/// A single field's validation failure.
///
/// Displays as the user-facing message configured on the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A required field is empty or blank.
    #[error("{message}")]
    MissingRequired {
        /// The field name.
        field: String,
        /// The message shown to the user.
        message: String,
    },

    /// A non-empty field does not satisfy its rule.
    #[error("{message}")]
    PatternMismatch {
        /// The field name.
        field: String,
        /// The message shown to the user.
        message: String,
    },
}

impl FieldError {
    /// Returns the name of the field that failed.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingRequired { field, .. } | Self::PatternMismatch { field, .. } => field,
        }
    }

    /// Returns the user-facing message.
    pub fn message(&self) -> &str {
        match self {
            Self::MissingRequired { message, .. } | Self::PatternMismatch { message, .. } => {
                message
            }
        }
    }

    /// Returns a short code identifying the failure ("required" or "invalid").
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingRequired { .. } => "required",
            Self::PatternMismatch { .. } => "invalid",
        }
    }
}

/// The submission channel reported failure.
///
/// The pipeline treats every variant the same way; the distinction only
/// matters for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The receiving side refused the submission.
    #[error("submission rejected: {0}")]
    Rejected(String),

    /// The channel could not deliver the submission.
    #[error("channel unavailable: {0}")]
    Unavailable(String),

    /// No answer arrived within the configured timeout.
    #[error("submission timed out after {0:?}")]
    TimedOut(Duration),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_accessors() {
        let err = FieldError::PatternMismatch {
            field: "phone".into(),
            message: "מספר טלפון לא תקין".into(),
        };
        assert_eq!(err.field(), "phone");
        assert_eq!(err.message(), "מספר טלפון לא תקין");
        assert_eq!(err.code(), "invalid");
        assert_eq!(err.to_string(), "מספר טלפון לא תקין");
    }

    #[test]
    fn test_missing_required_code() {
        let err = FieldError::MissingRequired {
            field: "name".into(),
            message: "שדה חובה".into(),
        };
        assert_eq!(err.code(), "required");
    }

    #[test]
    fn test_submission_error_display() {
        let err = SubmissionError::TimedOut(Duration::from_secs(3));
        assert_eq!(err.to_string(), "submission timed out after 3s");
        assert_eq!(
            SubmissionError::Rejected("full".into()).to_string(),
            "submission rejected: full"
        );
    }
}
