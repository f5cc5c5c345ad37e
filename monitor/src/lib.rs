pub mod config;
pub mod constants;
pub mod errors;
pub mod health;
pub mod services;

// Re-export commonly used types
pub use config::{Cli, Config, ConfigManager, NodeConfig, SmtpConfig};
pub use errors::{ConfigError, FetchError, MonitorError, NotifyError};
pub use health::{CosmosHeightSource, CycleResult, HeightMonitor, HeightSource, PollOutcome};
pub use services::{EmailNotifier, Notifier};
