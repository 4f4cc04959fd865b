// AgentDeck - app/dispatcher.rs
//
// Request lifecycle for simulated agent calls. Each submission runs the mock
// dispatcher on a short-lived background thread after a simulated latency,
// sending the outcome to the UI thread via an mpsc channel.
//
// Architecture:
//   - `DispatchManager` lives on the UI thread and owns the receiver.
//   - Every worker gets a clone of the sender and exits after one message.
//   - Request IDs are monotonically increasing so the UI can discard
//     outcomes for requests it has since abandoned (panel reset).

use crate::core::dispatch;
use crate::core::model::{AgentKind, DispatchOutcome};
use std::sync::mpsc;
use std::time::Duration;

/// Owns the outcome channel and hands out request IDs.
pub struct DispatchManager {
    tx: mpsc::Sender<DispatchOutcome>,
    rx: mpsc::Receiver<DispatchOutcome>,
    next_request_id: u64,
}

impl DispatchManager {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            next_request_id: 1,
        }
    }

    /// Submit `prompt` on behalf of panel `kind`.
    ///
    /// Spawns a background thread immediately and returns the request ID
    /// the outcome will carry.
    pub fn submit(&mut self, kind: AgentKind, prompt: String, latency: Duration) -> u64 {
        let request_id = self.next_request_id;
        self.next_request_id += 1;

        let tx = self.tx.clone();
        std::thread::spawn(move || {
            run_request(request_id, kind, prompt, latency, tx);
        });

        tracing::info!(
            request_id,
            agent = ?kind,
            latency_ms = latency.as_millis() as u64,
            "Dispatch submitted"
        );
        request_id
    }

    /// Poll for outcomes without blocking. Returns all pending outcomes.
    pub fn poll(&self) -> Vec<DispatchOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(outcome) = self.rx.try_recv() {
            outcomes.push(outcome);
        }
        outcomes
    }
}

impl Default for DispatchManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Worker body: wait out the simulated latency, answer, report.
fn run_request(
    request_id: u64,
    kind: AgentKind,
    prompt: String,
    latency: Duration,
    tx: mpsc::Sender<DispatchOutcome>,
) {
    if !latency.is_zero() {
        std::thread::sleep(latency);
    }

    let result = dispatch::mock_dispatch(&prompt);
    if let Err(ref e) = result {
        tracing::warn!(request_id, agent = ?kind, error = %e, "Dispatch failed");
    }

    let outcome = DispatchOutcome {
        request_id,
        kind,
        generated_at: chrono::Utc::now(),
        result,
    };

    if tx.send(outcome).is_err() {
        // Receiver dropped (UI closed); exit quietly.
        tracing::debug!(request_id, "Dispatch outcome dropped: receiver gone");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    /// Block until `n` outcomes arrive or the deadline passes.
    fn wait_for(manager: &DispatchManager, n: usize) -> Vec<DispatchOutcome> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut got = Vec::new();
        while got.len() < n && Instant::now() < deadline {
            got.extend(manager.poll());
            std::thread::sleep(Duration::from_millis(5));
        }
        got
    }

    #[test]
    fn test_request_ids_increase() {
        let mut manager = DispatchManager::new();
        let a = manager.submit(AgentKind::Narrative, "narrative".into(), Duration::ZERO);
        let b = manager.submit(AgentKind::Compliance, "compliance".into(), Duration::ZERO);
        assert!(b > a);
        wait_for(&manager, 2);
    }

    #[test]
    fn test_outcome_carries_request_and_kind() {
        let mut manager = DispatchManager::new();
        let id = manager.submit(
            AgentKind::Segmentation,
            "Segment the audience".into(),
            Duration::from_millis(10),
        );
        let outcomes = wait_for(&manager, 1);
        assert_eq!(outcomes.len(), 1);
        let outcome = &outcomes[0];
        assert_eq!(outcome.request_id, id);
        assert_eq!(outcome.kind, AgentKind::Segmentation);
        assert_eq!(
            outcome.result.as_ref().map(|r| r.kind()),
            Ok(AgentKind::Segmentation)
        );
    }

    #[test]
    fn test_unrecognised_prompt_delivers_error() {
        let mut manager = DispatchManager::new();
        manager.submit(AgentKind::Competitor, "hello".into(), Duration::ZERO);
        let outcomes = wait_for(&manager, 1);
        assert!(outcomes[0].result.is_err());
    }

    #[test]
    fn test_poll_is_non_blocking_when_idle() {
        let manager = DispatchManager::new();
        assert!(manager.poll().is_empty());
    }
}
