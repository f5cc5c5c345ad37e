// File: monitor/src/config/manager.rs
use super::{Cli, Config, ConfigFile};
use crate::errors::ConfigError;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info};

pub struct ConfigManager {
    current_config: Arc<Config>,
}

impl ConfigManager {
    pub async fn new(cli: &Cli) -> Result<Self, ConfigError> {
        let config = Self::load_configuration(cli).await?;
        Ok(Self {
            current_config: Arc::new(config),
        })
    }

    pub fn get_current_config(&self) -> Arc<Config> {
        self.current_config.clone()
    }

    async fn load_configuration(cli: &Cli) -> Result<Config, ConfigError> {
        let file = match &cli.config {
            Some(path) => Self::load_file(path).await?,
            None => {
                debug!("No config file given, using command line and environment only");
                ConfigFile::default()
            }
        };

        let config = Config::resolve(cli, file)?;

        info!(
            "Monitoring {} every {}s, alerts to {} via {}:{}",
            config.node.address(),
            config.check_interval_seconds,
            config.smtp.to_email,
            config.smtp.server,
            config.smtp.port
        );

        Ok(config)
    }

    pub async fn load_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::LoadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        debug!("Loaded config file: {}", path.display());

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            reason: format!("{}: {}", path.display(), e),
        })
    }
}
