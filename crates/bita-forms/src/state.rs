//! Form status and state snapshots.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error::FieldError;
use crate::fields::FieldSpec;

/// Active field errors keyed by field name. Absent means valid.
pub type FormErrors = HashMap<String, FieldError>;

/// Why a form is in the `Failed` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Local validation rejected the values; the channel was never contacted.
    Validation,
    /// The submission channel failed.
    Channel,
}

/// Lifecycle status of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum FormStatus {
    /// Editable and ready to submit.
    Idle,
    /// A submission is in flight. Edits and resubmission are locked.
    Submitting,
    /// The last submission was accepted.
    Succeeded,
    /// The last submission attempt failed.
    Failed(FailureKind),
}

impl FormStatus {
    /// Returns `true` if `submit` may start from this status.
    pub const fn accepts_submit(self) -> bool {
        matches!(self, Self::Idle | Self::Failed(_))
    }
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Submitting => write!(f, "submitting"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed(FailureKind::Validation) => write!(f, "failed (validation)"),
            Self::Failed(FailureKind::Channel) => write!(f, "failed (channel)"),
        }
    }
}

/// A point-in-time view of one form instance.
///
/// Only the pipeline writes this state; callers receive clones via
/// [`FormPipeline::snapshot`](crate::pipeline::FormPipeline::snapshot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub(crate) values: HashMap<String, String>,
    pub(crate) errors: FormErrors,
    pub(crate) status: FormStatus,
}

impl FormState {
    /// Creates the initial state: every declared field empty, no errors, `Idle`.
    pub fn initial(specs: &[FieldSpec]) -> Self {
        Self {
            values: empty_values(specs),
            errors: FormErrors::new(),
            status: FormStatus::Idle,
        }
    }

    /// Current field values.
    pub const fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Returns one field's value.
    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Active field errors.
    pub const fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Returns one field's active error message.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(FieldError::message)
    }

    /// Current status.
    pub const fn status(&self) -> FormStatus {
        self.status
    }

    /// Returns `true` while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }
}

pub(crate) fn empty_values(specs: &[FieldSpec]) -> HashMap<String, String> {
    specs
        .iter()
        .map(|spec| (spec.name.clone(), String::new()))
        .collect()
}
