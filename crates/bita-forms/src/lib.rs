//! # bita-forms
//!
//! Client-side form pipeline for the Bita site. A form is a table of
//! [`FieldSpec`]s plus a [`FormPipeline`] that owns the current values,
//! validates them in one pass, and drives the submission state machine:
//!
//! ```text
//! Idle --submit(valid)--> Submitting --success--> Succeeded --(timeout|edit)--> Idle
//! Idle --submit(invalid)--> Failed(validation) --edit--> Idle
//! Submitting --failure--> Failed(channel) --submit--> Submitting
//! ```
//!
//! Delivery is delegated to a [`SubmissionChannel`]; outcomes are reported
//! to a [`Notifier`] as transient [`Notice`]s.
//!
//! ## Modules
//!
//! - [`fields`] - Field specs and validation rules
//! - [`validation`] - Per-field and whole-form validation
//! - [`state`] - Form status and state snapshot
//! - [`channel`] - Submission channel trait, payload, and the simulated channel
//! - [`notice`] - User-facing notices and the notice board
//! - [`pipeline`] - The submission state machine
//! - [`presets`] - The booking and contact forms

pub mod channel;
pub mod error;
pub mod fields;
pub mod notice;
pub mod pipeline;
pub mod presets;
pub mod state;
pub mod validation;

pub use channel::{FormPayload, SimulatedChannel, SubmissionChannel};
pub use error::{FieldError, SubmissionError};
pub use fields::{FieldRule, FieldSpec};
pub use notice::{Notice, NoticeBoard, NoticeLevel, Notifier};
pub use pipeline::{FormPipeline, SubmitOutcome};
pub use presets::{booking_form, contact_form};
pub use state::{FailureKind, FormErrors, FormState, FormStatus};
pub use validation::{validate_field, validate_form};
