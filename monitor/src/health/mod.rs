//! Health monitoring module
//!
//! Height polling for a single Cosmos node and the stall/outage state machine.

pub mod cosmos;
pub mod monitor;
pub mod state;
pub mod types;

pub use cosmos::CosmosHeightSource;
pub use monitor::{CycleResult, HeightMonitor};
pub use state::{AlertKind, AlertState, Condition};
pub use types::{HeightSource, PollOutcome};
