//! In-memory height source and notifier doubles
//!
//! These stand in for the node and the SMTP server so the monitoring loop can
//! be driven cycle by cycle.

use async_trait::async_trait;
use node_monitor::{FetchError, HeightSource, NodeConfig, Notifier, PollOutcome};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn node_config() -> NodeConfig {
    NodeConfig {
        host: "node.example.com".to_string(),
        port: 26657,
        timeout_seconds: 10,
    }
}

pub fn fetch_failure() -> PollOutcome {
    PollOutcome::FetchError(FetchError::ConnectionFailed {
        url: "http://node.example.com:26657/status".to_string(),
        reason: "connection refused".to_string(),
    })
}

/// Height source that replays a fixed list of outcomes
pub struct ScriptedSource {
    outcomes: Mutex<VecDeque<PollOutcome>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(outcomes: Vec<PollOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn heights(heights: &[u64]) -> Self {
        Self::new(heights.iter().copied().map(PollOutcome::Height).collect())
    }

    /// Number of times `fetch` was called
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HeightSource for ScriptedSource {
    async fn fetch(&self) -> PollOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                PollOutcome::FetchError(FetchError::ConnectionFailed {
                    url: "scripted".to_string(),
                    reason: "no scripted outcome left".to_string(),
                })
            })
    }
}

/// A message handed to the notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub subject: String,
    pub body: String,
    pub accepted: bool,
}

/// Notifier that records every attempt and answers from a script
pub struct RecordingNotifier {
    responses: Mutex<VecDeque<bool>>,
    default_response: bool,
    sent: Mutex<Vec<SentMessage>>,
}

impl RecordingNotifier {
    pub fn accepting() -> Self {
        Self::scripted(Vec::new(), true)
    }

    pub fn always_failing() -> Self {
        Self::scripted(Vec::new(), false)
    }

    /// Refuse the first `n` attempts, then accept
    pub fn failing_first(n: usize) -> Self {
        Self::scripted(vec![false; n], true)
    }

    pub fn scripted(responses: Vec<bool>, default_response: bool) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            default_response,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Every attempt, accepted or not
    pub fn attempts(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// Attempts the transport accepted
    pub fn delivered(&self) -> Vec<SentMessage> {
        self.attempts().into_iter().filter(|m| m.accepted).collect()
    }

    pub fn delivered_subjects(&self) -> Vec<String> {
        self.delivered().into_iter().map(|m| m.subject).collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, subject: &str, body: &str) -> bool {
        let accepted = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(self.default_response);

        self.sent.lock().unwrap().push(SentMessage {
            subject: subject.to_string(),
            body: body.to_string(),
            accepted,
        });

        accepted
    }
}
