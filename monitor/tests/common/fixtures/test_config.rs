//! Test configuration builder for writing TOML config files

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builder for creating test configuration files
#[derive(Default)]
pub struct TestConfigBuilder {
    node_host: Option<String>,
    node_port: Option<u16>,
    smtp_server: Option<String>,
    smtp_port: Option<u16>,
    smtp_username: Option<String>,
    smtp_password: Option<String>,
    to_email: Option<String>,
    from_email: Option<String>,
    check_interval_seconds: Option<u64>,
    send_test_email: Option<bool>,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-filled with every required field
    pub fn complete() -> Self {
        Self::new()
            .node_host("10.1.0.7")
            .smtp_server("smtp.example.com")
            .to_email("ops@example.com")
    }

    pub fn node_host(mut self, host: &str) -> Self {
        self.node_host = Some(host.to_string());
        self
    }

    pub fn node_port(mut self, port: u16) -> Self {
        self.node_port = Some(port);
        self
    }

    pub fn smtp_server(mut self, server: &str) -> Self {
        self.smtp_server = Some(server.to_string());
        self
    }

    pub fn smtp_port(mut self, port: u16) -> Self {
        self.smtp_port = Some(port);
        self
    }

    pub fn smtp_credentials(mut self, username: &str, password: &str) -> Self {
        self.smtp_username = Some(username.to_string());
        self.smtp_password = Some(password.to_string());
        self
    }

    pub fn to_email(mut self, email: &str) -> Self {
        self.to_email = Some(email.to_string());
        self
    }

    pub fn from_email(mut self, email: &str) -> Self {
        self.from_email = Some(email.to_string());
        self
    }

    pub fn check_interval(mut self, seconds: u64) -> Self {
        self.check_interval_seconds = Some(seconds);
        self
    }

    pub fn send_test_email(mut self, enabled: bool) -> Self {
        self.send_test_email = Some(enabled);
        self
    }

    pub fn to_toml(&self) -> String {
        let mut toml = String::from("[node]\n");
        push_str(&mut toml, "host", &self.node_host);
        push_raw(&mut toml, "port", &self.node_port);

        toml.push_str("\n[smtp]\n");
        push_str(&mut toml, "server", &self.smtp_server);
        push_raw(&mut toml, "port", &self.smtp_port);
        push_str(&mut toml, "username", &self.smtp_username);
        push_str(&mut toml, "password", &self.smtp_password);
        push_str(&mut toml, "to_email", &self.to_email);
        push_str(&mut toml, "from_email", &self.from_email);

        toml.push_str("\n[monitor]\n");
        push_raw(&mut toml, "check_interval_seconds", &self.check_interval_seconds);
        push_raw(&mut toml, "send_test_email", &self.send_test_email);
        toml
    }

    /// Write the config to a temp directory
    pub fn build(self) -> TestConfig {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("monitor.toml");
        fs::write(&path, self.to_toml()).expect("Failed to write monitor.toml");

        TestConfig {
            _temp_dir: temp_dir,
            path,
        }
    }
}

fn push_str(toml: &mut String, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        toml.push_str(&format!("{} = \"{}\"\n", key, value));
    }
}

fn push_raw<T: std::fmt::Display>(toml: &mut String, key: &str, value: &Option<T>) {
    if let Some(value) = value {
        toml.push_str(&format!("{} = {}\n", key, value));
    }
}

/// Config file on disk; removed when dropped
pub struct TestConfig {
    _temp_dir: TempDir,
    pub path: PathBuf,
}
