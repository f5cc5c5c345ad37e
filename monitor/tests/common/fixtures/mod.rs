//! This module provides reusable test utilities:
//! - Mock node status server
//! - Scripted height sources and recording notifiers
//! - Test configuration builders

// Allow unused code in test fixtures - not every test binary uses every helper
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod scripted;
pub mod test_config;

// Re-export commonly used items
pub use mock_rpc::MockRpcServer;
pub use scripted::{fetch_failure, node_config, RecordingNotifier, ScriptedSource, SentMessage};
pub use test_config::TestConfigBuilder;
