//! Submission channel abstraction.
//!
//! The pipeline hands validated values to a [`SubmissionChannel`] exactly
//! once per accepted submission and awaits its answer. How the payload
//! travels is the channel's business.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::error::SubmissionError;

/// The validated values of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormPayload {
    /// Name of the submitting form (e.g. "booking").
    pub form: String,
    /// Unique id of this submission attempt.
    pub submission_id: Uuid,
    /// Field values, ordered by field name.
    pub values: BTreeMap<String, String>,
}

impl FormPayload {
    /// Creates a payload with a fresh submission id.
    pub fn new(form: impl Into<String>, values: &HashMap<String, String>) -> Self {
        Self {
            form: form.into(),
            submission_id: Uuid::new_v4(),
            values: values
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    /// Returns one field's value.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Serializes the payload as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "form": self.form,
            "submission_id": self.submission_id.to_string(),
            "values": self.values,
        })
    }
}

/// Delivers a validated form payload.
///
/// Implementations must be `Send + Sync` so a form can be driven from any
/// task. The pipeline never calls `send` twice for the same submission and
/// never retries on its own.
#[async_trait]
pub trait SubmissionChannel: Send + Sync {
    /// Sends the payload and reports whether the receiver accepted it.
    async fn send(&self, payload: &FormPayload) -> Result<(), SubmissionError>;
}

/// A channel that waits a fixed delay and then resolves.
///
/// This stands in for a backend the site does not have yet: it logs the
/// payload, sleeps, and either accepts or rejects every submission.
#[derive(Debug, Clone)]
pub struct SimulatedChannel {
    delay: Duration,
    fail: bool,
}

impl SimulatedChannel {
    /// Creates a channel that accepts every submission after `delay`.
    pub const fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// Creates a channel that rejects every submission after `delay`.
    pub const fn failing(delay: Duration) -> Self {
        Self { delay, fail: true }
    }
}

#[async_trait]
impl SubmissionChannel for SimulatedChannel {
    async fn send(&self, payload: &FormPayload) -> Result<(), SubmissionError> {
        tracing::info!(payload = %payload.to_json(), "simulated submission");
        tokio::time::sleep(self.delay).await;
        if self.fail {
            Err(SubmissionError::Unavailable(
                "simulated channel is configured to fail".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> FormPayload {
        let mut values = HashMap::new();
        values.insert("name".to_string(), "Dana".to_string());
        values.insert("email".to_string(), "d@x.com".to_string());
        FormPayload::new("contact", &values)
    }

    #[test]
    fn test_payload_values_sorted() {
        let payload = payload();
        let keys: Vec<&String> = payload.values.keys().collect();
        assert_eq!(keys, vec!["email", "name"]);
        assert_eq!(payload.get("name"), Some("Dana"));
        assert_eq!(payload.get("phone"), None);
    }

    #[test]
    fn test_payload_ids_unique() {
        assert_ne!(payload().submission_id, payload().submission_id);
    }

    #[test]
    fn test_payload_to_json() {
        let payload = payload();
        let json = payload.to_json();
        assert_eq!(json["form"], "contact");
        assert_eq!(json["values"]["email"], "d@x.com");
        assert_eq!(json["submission_id"], payload.submission_id.to_string());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_channel_succeeds_after_delay() {
        let channel = SimulatedChannel::new(Duration::from_millis(1500));
        let start = tokio::time::Instant::now();
        channel.send(&payload()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_channel_failing() {
        let channel = SimulatedChannel::failing(Duration::from_millis(10));
        let err = channel.send(&payload()).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Unavailable(_)));
    }
}
