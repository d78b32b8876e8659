//! A submission channel that holds every call until released.
//!
//! Useful for observing a form while it is `Submitting`: start the submit on
//! a task, wait for the call to arrive with [`GateChannel::wait_for_calls`],
//! inspect the form, then [`release`](GateChannel::release) it.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;

use bita_forms::{FormPayload, SubmissionChannel, SubmissionError};

#[derive(Debug, Default)]
struct Gate {
    calls: usize,
    waiting: VecDeque<oneshot::Sender<Result<(), SubmissionError>>>,
}

/// A channel whose calls block until the test answers them, oldest first.
#[derive(Debug, Clone, Default)]
pub struct GateChannel {
    gate: Arc<Mutex<Gate>>,
}

impl GateChannel {
    /// Creates a closed gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of `send` calls so far.
    pub fn calls(&self) -> usize {
        self.gate.lock().expect("GateChannel lock poisoned").calls
    }

    /// Returns the number of calls currently held.
    pub fn pending(&self) -> usize {
        self.gate.lock().expect("GateChannel lock poisoned").waiting.len()
    }

    /// Yields until at least `n` calls have arrived.
    pub async fn wait_for_calls(&self, n: usize) {
        while self.calls() < n {
            tokio::task::yield_now().await;
        }
    }

    /// Answers the oldest held call. Returns `false` if none was held.
    pub fn release(&self, outcome: Result<(), SubmissionError>) -> bool {
        let sender = self
            .gate
            .lock()
            .expect("GateChannel lock poisoned")
            .waiting
            .pop_front();
        sender.is_some_and(|tx| tx.send(outcome).is_ok())
    }
}

#[async_trait]
impl SubmissionChannel for GateChannel {
    async fn send(&self, _payload: &FormPayload) -> Result<(), SubmissionError> {
        let (tx, rx) = oneshot::channel();
        {
            let mut gate = self.gate.lock().expect("GateChannel lock poisoned");
            gate.calls += 1;
            gate.waiting.push_back(tx);
        }
        rx.await
            .unwrap_or_else(|_| Err(SubmissionError::Unavailable("gate dropped".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[tokio::test]
    async fn test_holds_until_released() {
        let gate = GateChannel::new();
        let task = {
            let gate = gate.clone();
            tokio::spawn(async move { gate.send(&FormPayload::new("t", &HashMap::new())).await })
        };

        gate.wait_for_calls(1).await;
        assert_eq!(gate.pending(), 1);
        assert!(!task.is_finished());

        assert!(gate.release(Err(SubmissionError::Rejected("x".into()))));
        assert!(matches!(task.await.unwrap(), Err(SubmissionError::Rejected(_))));
        assert_eq!(gate.pending(), 0);
    }

    #[test]
    fn test_release_without_call() {
        assert!(!GateChannel::new().release(Ok(())));
    }
}
