//! The form submission state machine.
//!
//! A [`FormPipeline`] owns one form instance: its field table, its current
//! [`FormState`], the channel it submits to, and the notifier it reports to.
//! It is the only writer of the form's status.
//!
//! Handles are cheap to clone and share the same form, so the rendering side
//! can keep editing (and be refused) while a submission task is awaiting the
//! channel. The state lock is never held across an `.await`.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tracing::Instrument;

use bita_core::logging::submission_span;
use bita_core::{BitaError, BitaResult, FormSettings};

use crate::channel::{FormPayload, SubmissionChannel};
use crate::error::SubmissionError;
use crate::fields::FieldSpec;
use crate::notice::{Notice, Notifier};
use crate::state::{FailureKind, FormErrors, FormState, FormStatus};
use crate::validation::{validate_field, validate_form};

/// What a call to [`FormPipeline::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The channel accepted the submission and the values were cleared.
    Succeeded,
    /// Validation failed; the channel was not contacted.
    Invalid(FormErrors),
    /// The channel failed; the values were kept.
    Failed(SubmissionError),
    /// The form was not in a submittable state and nothing happened.
    Dropped(FormStatus),
}

impl SubmitOutcome {
    /// Returns `true` if the submission was accepted.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// A single form instance and its submission state machine.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// use bita_core::FormSettings;
/// use bita_forms::{FieldSpec, FormPipeline, FormStatus, NoticeBoard, SimulatedChannel};
///
/// # tokio_test::block_on(async {
/// let board = NoticeBoard::new();
/// let form = FormPipeline::new(
///     "newsletter",
///     vec![FieldSpec::new("email")],
///     FormSettings::booking(),
///     Arc::new(SimulatedChannel::new(Duration::ZERO)),
///     Arc::new(board.clone()),
/// );
///
/// form.set_value("email", "d@x.com").unwrap();
/// assert!(form.submit().await.is_success());
/// assert_eq!(form.status(), FormStatus::Succeeded);
/// assert_eq!(board.len(), 1);
/// # });
/// ```
#[derive(Clone)]
pub struct FormPipeline {
    inner: Arc<Inner>,
}

struct Inner {
    name: String,
    specs: Vec<FieldSpec>,
    settings: FormSettings,
    channel: Arc<dyn SubmissionChannel>,
    notifier: Arc<dyn Notifier>,
    shared: Mutex<Shared>,
}

struct Shared {
    form: FormState,
    /// Whether the values have been validated since the last reset.
    checked: bool,
    /// Bumped on every submission and reset; stale dismiss timers compare against it.
    cycle: u64,
}

impl FormPipeline {
    /// Creates a form in the `Idle` state with every field empty.
    pub fn new(
        name: impl Into<String>,
        specs: Vec<FieldSpec>,
        settings: FormSettings,
        channel: Arc<dyn SubmissionChannel>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let form = FormState::initial(&specs);
        Self {
            inner: Arc::new(Inner {
                name: name.into(),
                specs,
                settings,
                channel,
                notifier,
                shared: Mutex::new(Shared {
                    form,
                    checked: false,
                    cycle: 0,
                }),
            }),
        }
    }

    /// Returns the form name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns the field table.
    pub fn specs(&self) -> &[FieldSpec] {
        &self.inner.specs
    }

    /// Looks up a field spec by name.
    pub fn spec(&self, field: &str) -> Option<&FieldSpec> {
        self.inner.specs.iter().find(|s| s.name == field)
    }

    /// Returns the form's settings.
    pub fn settings(&self) -> &FormSettings {
        &self.inner.settings
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> FormState {
        self.lock().form.clone()
    }

    /// Returns the current status.
    pub fn status(&self) -> FormStatus {
        self.lock().form.status
    }

    /// Returns `true` while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.status() == FormStatus::Submitting
    }

    /// Returns the active field errors.
    pub fn errors(&self) -> FormErrors {
        self.lock().form.errors.clone()
    }

    /// Returns the current field values.
    pub fn values(&self) -> HashMap<String, String> {
        self.lock().form.values.clone()
    }

    /// Returns one field's current value.
    pub fn value(&self, field: &str) -> Option<String> {
        self.lock().form.values.get(field).cloned()
    }

    /// Updates one field.
    ///
    /// An edit moves a `Succeeded` or validation-failed form back to `Idle`.
    /// Once the form has been validated, the edited field is re-checked so
    /// its error entry always matches its current value.
    ///
    /// # Errors
    ///
    /// [`BitaError::UnknownField`] if the field is not declared, and
    /// [`BitaError::FormBusy`] while a submission is in flight.
    pub fn set_value(&self, field: &str, value: impl Into<String>) -> BitaResult<()> {
        let spec = self.spec(field).ok_or_else(|| BitaError::UnknownField {
            form: self.inner.name.clone(),
            field: field.to_string(),
        })?;
        let value = value.into();

        let mut shared = self.lock();
        match shared.form.status {
            FormStatus::Submitting => return Err(BitaError::FormBusy(self.inner.name.clone())),
            FormStatus::Succeeded | FormStatus::Failed(FailureKind::Validation) => {
                tracing::info!(form = %self.inner.name, from = %shared.form.status, "edit returns form to idle");
                shared.form.status = FormStatus::Idle;
            }
            FormStatus::Idle | FormStatus::Failed(FailureKind::Channel) => {}
        }

        if shared.checked {
            match validate_field(spec, &value) {
                Ok(()) => {
                    shared.form.errors.remove(field);
                }
                Err(err) => {
                    shared.form.errors.insert(field.to_string(), err);
                }
            }
        }
        shared.form.values.insert(field.to_string(), value);
        tracing::debug!(form = %self.inner.name, field, "field updated");
        Ok(())
    }

    /// Updates several fields, stopping at the first refused edit.
    pub fn fill<I, K, V>(&self, values: I) -> BitaResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (field, value) in values {
            self.set_value(field.as_ref(), value)?;
        }
        Ok(())
    }

    /// Validates the current values and records the result without submitting.
    pub fn validate(&self) -> FormErrors {
        let mut shared = self.lock();
        let errors = validate_form(&self.inner.specs, &shared.form.values);
        shared.form.errors.clone_from(&errors);
        shared.checked = true;
        tracing::debug!(form = %self.inner.name, invalid = errors.len(), "form validated");
        errors
    }

    /// Discards all values and errors and returns to `Idle`.
    ///
    /// # Errors
    ///
    /// [`BitaError::FormBusy`] while a submission is in flight.
    pub fn reset(&self) -> BitaResult<()> {
        let mut shared = self.lock();
        if shared.form.status == FormStatus::Submitting {
            return Err(BitaError::FormBusy(self.inner.name.clone()));
        }
        shared.form = FormState::initial(&self.inner.specs);
        shared.checked = false;
        shared.cycle += 1;
        tracing::debug!(form = %self.inner.name, "form reset");
        Ok(())
    }

    /// Validates and submits the current values.
    ///
    /// Starts only from `Idle` or `Failed`; from any other status the call is
    /// dropped and returns [`SubmitOutcome::Dropped`]. Invalid values move the
    /// form to `Failed(Validation)` without contacting the channel. Otherwise
    /// the form is `Submitting` until the channel answers, then `Succeeded`
    /// (values cleared, success notice) or `Failed(Channel)` (values kept,
    /// error notice). Nothing is retried automatically.
    ///
    /// An accepted submission always runs to completion. The channel call is
    /// spawned onto the current tokio runtime, so dropping the returned
    /// future only stops waiting for the outcome; the form still leaves
    /// `Submitting` when the channel answers or the timeout expires.
    pub async fn submit(&self) -> SubmitOutcome {
        self.run(None).await
    }

    /// Replaces the values of the given fields and submits, as one step.
    ///
    /// The values are applied only if the submit is accepted: a dropped call
    /// leaves the form untouched. Fields not declared by the form are ignored.
    pub async fn submit_values<I, K, V>(&self, values: I) -> SubmitOutcome
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|(field, value)| (field.into(), value.into()))
            .collect();
        self.run(Some(values)).await
    }

    async fn run(&self, values: Option<Vec<(String, String)>>) -> SubmitOutcome {
        let (payload, cycle) = match self.begin(values) {
            Ok(started) => started,
            Err(outcome) => return outcome,
        };

        // Delivery runs on its own task: dropping this future must not strand
        // the form in `Submitting`.
        let span = submission_span(&self.inner.name, &payload.submission_id.to_string());
        let form = self.clone();
        let delivery = tokio::spawn(
            async move {
                let result = form.deliver(&payload).await;
                form.finish(cycle, result)
            }
            .instrument(span),
        );

        match delivery.await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(form = %self.inner.name, error = %err, "submission task ended early");
                self.finish(
                    cycle,
                    Err(SubmissionError::Unavailable(format!("submission task ended: {err}"))),
                )
            }
        }
    }

    /// Runs the synchronous half of `submit`: precondition, validation, and
    /// the move to `Submitting`.
    fn begin(
        &self,
        values: Option<Vec<(String, String)>>,
    ) -> Result<(FormPayload, u64), SubmitOutcome> {
        let mut shared = self.lock();
        let status = shared.form.status;
        if !status.accepts_submit() {
            tracing::debug!(form = %self.inner.name, %status, "submit dropped");
            return Err(SubmitOutcome::Dropped(status));
        }

        for (field, value) in values.into_iter().flatten() {
            if self.spec(&field).is_some() {
                shared.form.values.insert(field, value);
            } else {
                tracing::debug!(form = %self.inner.name, field = %field, "ignoring undeclared field");
            }
        }

        let errors = validate_form(&self.inner.specs, &shared.form.values);
        shared.checked = true;
        if !errors.is_empty() {
            tracing::warn!(
                form = %self.inner.name,
                fields = ?errors.keys().collect::<Vec<_>>(),
                "submission rejected by validation"
            );
            shared.form.errors.clone_from(&errors);
            shared.form.status = FormStatus::Failed(FailureKind::Validation);
            return Err(SubmitOutcome::Invalid(errors));
        }

        shared.form.errors.clear();
        shared.form.status = FormStatus::Submitting;
        shared.cycle += 1;
        tracing::info!(form = %self.inner.name, from = %status, "submitting");
        Ok((FormPayload::new(&self.inner.name, &shared.form.values), shared.cycle))
    }

    /// Calls the channel once, bounded by the configured timeout if any.
    async fn deliver(&self, payload: &FormPayload) -> Result<(), SubmissionError> {
        let call = self.inner.channel.send(payload);
        match self.inner.settings.submission_timeout() {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| SubmissionError::TimedOut(limit))?,
            None => call.await,
        }
    }

    /// Applies the channel's answer.
    fn finish(&self, cycle: u64, result: Result<(), SubmissionError>) -> SubmitOutcome {
        let outcome = {
            let mut shared = self.lock();
            match result {
                Ok(()) => {
                    shared.form = FormState {
                        status: FormStatus::Succeeded,
                        ..FormState::initial(&self.inner.specs)
                    };
                    shared.checked = false;
                    tracing::info!(form = %self.inner.name, "submission succeeded");
                    SubmitOutcome::Succeeded
                }
                Err(err) => {
                    shared.form.status = FormStatus::Failed(FailureKind::Channel);
                    tracing::warn!(form = %self.inner.name, error = %err, "submission failed");
                    SubmitOutcome::Failed(err)
                }
            }
        };

        if outcome.is_success() {
            self.inner
                .notifier
                .notify(Notice::success(&self.inner.settings.success_message));
            if let Some(after) = self.inner.settings.success_display.dismiss_after() {
                self.schedule_dismiss(after, cycle);
            }
        } else {
            self.inner
                .notifier
                .notify(Notice::error(&self.inner.settings.error_message));
        }
        outcome
    }

    fn schedule_dismiss(&self, after: Duration, cycle: u64) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(form = %self.inner.name, "no runtime for dismiss timer; success stays until the next edit");
            return;
        };
        let inner = Arc::downgrade(&self.inner);
        runtime.spawn(async move {
            tokio::time::sleep(after).await;
            if let Some(inner) = inner.upgrade() {
                Self { inner }.dismiss_success(cycle);
            }
        });
    }

    fn dismiss_success(&self, cycle: u64) {
        let mut shared = self.lock();
        if shared.cycle == cycle && shared.form.status == FormStatus::Succeeded {
            shared.form.status = FormStatus::Idle;
            tracing::info!(form = %self.inner.name, "success notice dismissed");
        }
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.inner.shared.lock().expect("form state lock poisoned")
    }
}

impl fmt::Debug for FormPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormPipeline")
            .field("name", &self.inner.name)
            .field("fields", &self.inner.specs.len())
            .field("status", &self.status())
            .finish_non_exhaustive()
    }
}
