//! In-memory capture channel for form submissions.
//!
//! [`RecordingChannel`] stores every payload it is handed instead of sending
//! it anywhere, and answers with scripted outcomes (success once the script
//! runs out).
//!
//! ## Example
//!
//! ```rust,no_run
//! use bita_forms::SubmissionError;
//! use bita_test::RecordingChannel;
//!
//! let channel = RecordingChannel::new();
//! channel.push_outcome(Err(SubmissionError::Rejected("full".into())));
//! // First submission fails, every later one succeeds.
//! assert_eq!(channel.calls(), 0);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use bita_forms::{FormPayload, SubmissionChannel, SubmissionError};

#[derive(Debug, Default)]
struct Recorded {
    payloads: Vec<FormPayload>,
    script: VecDeque<Result<(), SubmissionError>>,
}

/// A submission channel that records payloads.
///
/// Clones share the same recording, so one handle can be given to a form and
/// another kept for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingChannel {
    recorded: Arc<Mutex<Recorded>>,
    delay: Duration,
}

impl RecordingChannel {
    /// Creates a channel that answers immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a channel that waits `delay` before answering.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    /// Queues the outcome of the next unscripted call.
    pub fn push_outcome(&self, outcome: Result<(), SubmissionError>) {
        self.recorded
            .lock()
            .expect("RecordingChannel lock poisoned")
            .script
            .push_back(outcome);
    }

    /// Makes the next call fail with [`SubmissionError::Rejected`].
    pub fn fail_next(&self, reason: &str) {
        self.push_outcome(Err(SubmissionError::Rejected(reason.to_string())));
    }

    /// Returns every payload received so far.
    pub fn payloads(&self) -> Vec<FormPayload> {
        self.recorded
            .lock()
            .expect("RecordingChannel lock poisoned")
            .payloads
            .clone()
    }

    /// Returns the most recent payload.
    pub fn last(&self) -> Option<FormPayload> {
        self.recorded
            .lock()
            .expect("RecordingChannel lock poisoned")
            .payloads
            .last()
            .cloned()
    }

    /// Returns the number of `send` calls.
    pub fn calls(&self) -> usize {
        self.recorded
            .lock()
            .expect("RecordingChannel lock poisoned")
            .payloads
            .len()
    }
}

#[async_trait]
impl SubmissionChannel for RecordingChannel {
    async fn send(&self, payload: &FormPayload) -> Result<(), SubmissionError> {
        let outcome = {
            let mut recorded = self.recorded.lock().expect("RecordingChannel lock poisoned");
            recorded.payloads.push(payload.clone());
            recorded.script.pop_front().unwrap_or(Ok(()))
        };
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        outcome
    }
}
