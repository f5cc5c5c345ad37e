//! Default values and notification templates
//!
//! Organised by category so every default lives in one place.

/// Node status endpoint defaults
pub mod node {
    /// Default Tendermint RPC port
    pub const DEFAULT_PORT: u16 = 26657;

    /// Path polled for the latest block height
    pub const STATUS_PATH: &str = "/status";

    /// Per-request timeout for status queries
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
}

/// SMTP defaults
pub mod smtp {
    /// Submission port (STARTTLS)
    pub const DEFAULT_PORT: u16 = 587;

    /// Upper bound on one SMTP session
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
}

/// Monitoring loop defaults
pub mod monitor {
    /// Seconds between the end of one check and the start of the next
    pub const DEFAULT_CHECK_INTERVAL_SECONDS: u64 = 300;

    /// Shorter intervals passed to the library are raised to this
    pub const MIN_CHECK_INTERVAL_MILLIS: u64 = 1000;

    /// Emit a cycle summary every N cycles
    pub const CYCLE_LOG_EVERY: u64 = 10;
}

/// Notification subjects
pub mod subjects {
    pub const STALLED: &str = "Node is not processing new blocks";
    pub const DOWN: &str = "Node is down";
    pub const TEST: &str = "Test Email";
}
