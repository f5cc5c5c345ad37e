//! Custom error types for the node monitor
//!
//! Fetch and notify failures are contained by their adapters and never stop the
//! monitoring loop. Configuration and startup failures are fatal.

use std::fmt;

/// Main error type for the node monitor
#[derive(Debug)]
pub enum MonitorError {
    /// Configuration-related errors
    Config(ConfigError),

    /// Notifier could not be constructed
    Notify(NotifyError),

    /// HTTP client for the status endpoint could not be built
    HttpClient { reason: String },

    /// The requested startup test notification was not accepted
    TestNotificationFailed { target: String },
}

/// Configuration error variants
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to load configuration file
    LoadFailed { path: String, reason: String },

    /// Configuration parsing error
    ParseError { reason: String },

    /// Missing required configuration
    MissingRequired { field: String },

    /// Invalid configuration value
    InvalidValue { field: String, reason: String },
}

/// Failure to obtain a height from the node's status endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection to the node failed
    ConnectionFailed { url: String, reason: String },

    /// Request did not complete within the configured timeout
    Timeout { url: String },

    /// Node answered with a non-success HTTP status
    HttpStatus { url: String, status: u16 },

    /// Response body was not valid JSON
    InvalidBody { reason: String },

    /// Node returned a JSON-RPC error object
    Rpc { code: i64, message: String },

    /// Expected field absent from the response
    MissingField { field: String },

    /// Height present but not a non-negative integer
    InvalidHeight { value: String },
}

/// Notification transport errors
#[derive(Debug)]
pub enum NotifyError {
    /// Sender or recipient address rejected
    InvalidAddress { address: String, reason: String },

    /// SMTP transport could not be set up
    TransportSetup { server: String, reason: String },

    /// Message could not be assembled
    MessageBuild { reason: String },

    /// SMTP server refused or the session failed
    SendFailed { server: String, reason: String },

    /// SMTP session did not complete in time
    Timeout { server: String },
}

impl fmt::Display for MonitorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorError::Config(e) => write!(f, "Configuration error: {}", e),
            MonitorError::Notify(e) => write!(f, "Notifier error: {}", e),
            MonitorError::HttpClient { reason } => {
                write!(f, "Failed to build HTTP client: {}", reason)
            }
            MonitorError::TestNotificationFailed { target } => {
                write!(f, "Unable to send test message to {} - quitting", target)
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path, reason)
            }
            ConfigError::ParseError { reason } => {
                write!(f, "Failed to parse config: {}", reason)
            }
            ConfigError::MissingRequired { field } => {
                write!(f, "Missing required field: {}", field)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::ConnectionFailed { url, reason } => {
                write!(f, "Connection to {} failed: {}", url, reason)
            }
            FetchError::Timeout { url } => write!(f, "Request to {} timed out", url),
            FetchError::HttpStatus { url, status } => {
                write!(f, "Request to {} failed with status {}", url, status)
            }
            FetchError::InvalidBody { reason } => {
                write!(f, "Failed to parse JSON response: {}", reason)
            }
            FetchError::Rpc { code, message } => {
                write!(f, "RPC error {}: {}", code, message)
            }
            FetchError::MissingField { field } => {
                write!(f, "Response is missing field '{}'", field)
            }
            FetchError::InvalidHeight { value } => {
                write!(f, "Block height '{}' is not a non-negative integer", value)
            }
        }
    }
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyError::InvalidAddress { address, reason } => {
                write!(f, "Invalid email address '{}': {}", address, reason)
            }
            NotifyError::TransportSetup { server, reason } => {
                write!(f, "Failed to set up SMTP transport for {}: {}", server, reason)
            }
            NotifyError::MessageBuild { reason } => {
                write!(f, "Failed to build email: {}", reason)
            }
            NotifyError::SendFailed { server, reason } => {
                write!(f, "Failed to send email via {}: {}", server, reason)
            }
            NotifyError::Timeout { server } => {
                write!(f, "SMTP session with {} timed out", server)
            }
        }
    }
}

impl std::error::Error for MonitorError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for FetchError {}
impl std::error::Error for NotifyError {}

impl From<ConfigError> for MonitorError {
    fn from(err: ConfigError) -> Self {
        MonitorError::Config(err)
    }
}

impl From<NotifyError> for MonitorError {
    fn from(err: NotifyError) -> Self {
        MonitorError::Notify(err)
    }
}
