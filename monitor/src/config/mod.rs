// File: monitor/src/config/mod.rs
pub mod cli;
pub mod manager;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

pub use cli::Cli;
pub use manager::ConfigManager;

/// Resolved, validated configuration shared read-only by the monitor and its adapters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub node: NodeConfig,
    pub smtp: SmtpConfig,
    pub check_interval_seconds: u64,
    pub send_test_email: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    pub host: String,
    pub port: u16,
    pub timeout_seconds: u64,
}

impl NodeConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn status_url(&self) -> String {
        format!("{}{}", self.base_url(), constants::node::STATUS_PATH)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    pub server: String,
    pub port: u16,
    pub username: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub to_email: String,
    pub from_email: String,
    pub timeout_seconds: u64,
}

/// On-disk TOML layout; every field is optional so the CLI can fill the gaps
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub node: NodeSection,
    pub smtp: SmtpSection,
    pub monitor: MonitorSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpSection {
    pub server: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub to_email: Option<String>,
    pub from_email: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorSection {
    pub check_interval_seconds: Option<u64>,
    pub send_test_email: Option<bool>,
}

impl Config {
    /// Merge command line values over file values over defaults, then validate.
    pub fn resolve(cli: &Cli, file: ConfigFile) -> Result<Self, ConfigError> {
        let node = NodeConfig {
            host: required(
                "node_host",
                non_empty(cli.node_host.clone()).or(non_empty(file.node.host)),
            )?,
            port: cli
                .node_port
                .or(file.node.port)
                .unwrap_or(constants::node::DEFAULT_PORT),
            timeout_seconds: cli
                .node_timeout
                .or(file.node.timeout_seconds)
                .unwrap_or(constants::node::DEFAULT_TIMEOUT_SECONDS),
        };

        let to_email = required(
            "to_email",
            non_empty(cli.to_email.clone()).or(non_empty(file.smtp.to_email)),
        )?;
        let from_email = non_empty(cli.from_email.clone())
            .or(non_empty(file.smtp.from_email))
            .unwrap_or_else(|| to_email.clone());

        let smtp = SmtpConfig {
            server: required(
                "smtp_server",
                non_empty(cli.smtp_server.clone()).or(non_empty(file.smtp.server)),
            )?,
            port: cli
                .smtp_port
                .or(file.smtp.port)
                .unwrap_or(constants::smtp::DEFAULT_PORT),
            username: non_empty(cli.smtp_username.clone()).or(non_empty(file.smtp.username)),
            password: cli.smtp_password.clone().or(file.smtp.password),
            to_email,
            from_email,
            timeout_seconds: cli
                .smtp_timeout
                .or(file.smtp.timeout_seconds)
                .unwrap_or(constants::smtp::DEFAULT_TIMEOUT_SECONDS),
        };

        let config = Config {
            node,
            smtp,
            check_interval_seconds: cli
                .check_interval
                .or(file.monitor.check_interval_seconds)
                .unwrap_or(constants::monitor::DEFAULT_CHECK_INTERVAL_SECONDS),
            send_test_email: cli.send_test_email || file.monitor.send_test_email.unwrap_or(false),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.check_interval_seconds == 0 {
            return Err(invalid("check_interval", "must be greater than zero"));
        }
        if self.node.port == 0 {
            return Err(invalid("node_port", "must be greater than zero"));
        }
        if self.node.timeout_seconds == 0 {
            return Err(invalid("node_timeout", "must be greater than zero"));
        }
        if self.smtp.port == 0 {
            return Err(invalid("smtp_port", "must be greater than zero"));
        }
        if self.smtp.timeout_seconds == 0 {
            return Err(invalid("smtp_timeout", "must be greater than zero"));
        }
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required(field: &str, value: Option<String>) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingRequired {
        field: field.to_string(),
    })
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
