//! Stall and outage detection state
//!
//! [`AlertState`] holds the last observed height and one [`Condition`] per
//! failure class. Stall and outage are tracked independently: recovering from
//! an outage does not reset a stall that was already reported, and vice versa.

use super::types::PollOutcome;
use crate::config::NodeConfig;
use crate::constants::subjects;

/// Whether the current episode of a failure class has been reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Condition {
    #[default]
    Clear,
    Notified,
}

/// An alert that is due this cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertKind {
    /// Height did not increase between two successful polls
    Stalled { last_height: u64, current_height: u64 },
    /// The status query failed
    Down { cause: String },
}

impl AlertKind {
    pub fn subject(&self) -> &'static str {
        match self {
            AlertKind::Stalled { .. } => subjects::STALLED,
            AlertKind::Down { .. } => subjects::DOWN,
        }
    }

    pub fn body(&self, node: &NodeConfig) -> String {
        match self {
            AlertKind::Stalled {
                last_height,
                current_height,
            } => format!(
                "The node at {} is not processing new blocks. \
                 Last block height: {}, current block height: {}",
                node.host, last_height, current_height
            ),
            AlertKind::Down { cause } => format!(
                "The node at {} is down. Error: {}",
                node.base_url(),
                cause
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertState {
    last_height: Option<u64>,
    stalled: Condition,
    down: Condition,
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_height(&self) -> Option<u64> {
        self.last_height
    }

    pub fn stalled(&self) -> Condition {
        self.stalled
    }

    pub fn down(&self) -> Condition {
        self.down
    }

    /// Apply one poll outcome and return the alert that should be sent, if any.
    ///
    /// A returned alert does not change its condition; call
    /// [`AlertState::mark_notified`] once the notifier has accepted it, so a
    /// failed send is attempted again on the next qualifying cycle.
    pub fn observe(&mut self, outcome: &PollOutcome) -> Option<AlertKind> {
        match outcome {
            PollOutcome::Height(height) => {
                let height = *height;
                self.down = Condition::Clear;

                let previous = self.last_height.replace(height)?;
                if height > previous {
                    self.stalled = Condition::Clear;
                    return None;
                }

                match self.stalled {
                    Condition::Clear => Some(AlertKind::Stalled {
                        last_height: previous,
                        current_height: height,
                    }),
                    Condition::Notified => None,
                }
            }
            PollOutcome::FetchError(cause) => match self.down {
                Condition::Clear => Some(AlertKind::Down {
                    cause: cause.to_string(),
                }),
                Condition::Notified => None,
            },
        }
    }

    pub fn mark_notified(&mut self, alert: &AlertKind) {
        match alert {
            AlertKind::Stalled { .. } => self.stalled = Condition::Notified,
            AlertKind::Down { .. } => self.down = Condition::Notified,
        }
    }
}
