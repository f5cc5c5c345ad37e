// File: monitor/src/config/cli.rs
use std::path::PathBuf;

/// Monitor a Cosmos node and email when it stalls or goes down.
///
/// Every value can also come from a `NODE_MONITOR_*` environment variable or
/// from a TOML file passed with `--config`. Command line values take precedence over the file.
#[derive(clap::Parser, Debug, Clone, Default)]
#[command(name = "node-monitor", version, about = "Monitor a Cosmos node.")]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, env = "NODE_MONITOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// The hostname or IP address of the node
    #[arg(long, alias = "node_host", env = "NODE_MONITOR_NODE_HOST")]
    pub node_host: Option<String>,

    /// Port to use to query the node [default: 26657]
    #[arg(long, alias = "node_port", env = "NODE_MONITOR_NODE_PORT")]
    pub node_port: Option<u16>,

    /// Seconds before a status query is abandoned [default: 10]
    #[arg(long, alias = "node_timeout", env = "NODE_MONITOR_NODE_TIMEOUT")]
    pub node_timeout: Option<u64>,

    /// The SMTP server to use to send emails
    #[arg(long, alias = "smtp_server", env = "NODE_MONITOR_SMTP_SERVER")]
    pub smtp_server: Option<String>,

    /// The SMTP server port [default: 587]
    #[arg(long, alias = "smtp_port", env = "NODE_MONITOR_SMTP_PORT")]
    pub smtp_port: Option<u16>,

    #[arg(long, alias = "smtp_username", env = "NODE_MONITOR_SMTP_USERNAME")]
    pub smtp_username: Option<String>,

    #[arg(
        long,
        alias = "smtp_password",
        env = "NODE_MONITOR_SMTP_PASSWORD",
        hide_env_values = true
    )]
    pub smtp_password: Option<String>,

    /// Seconds before an SMTP session is abandoned [default: 30]
    #[arg(long, alias = "smtp_timeout", env = "NODE_MONITOR_SMTP_TIMEOUT")]
    pub smtp_timeout: Option<u64>,

    /// The email address to send notifications to
    #[arg(long, alias = "to_email", env = "NODE_MONITOR_TO_EMAIL")]
    pub to_email: Option<String>,

    /// The sender email (defaults to the recipient)
    #[arg(long, alias = "from_email", env = "NODE_MONITOR_FROM_EMAIL")]
    pub from_email: Option<String>,

    /// Send a test email on startup and quit if it fails
    #[arg(long, alias = "send_test_email", env = "NODE_MONITOR_SEND_TEST_EMAIL")]
    pub send_test_email: bool,

    /// Number of seconds between each check [default: 300]
    #[arg(long, alias = "check_interval", env = "NODE_MONITOR_CHECK_INTERVAL")]
    pub check_interval: Option<u64>,
}
