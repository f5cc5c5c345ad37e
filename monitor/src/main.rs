// File: monitor/src/main.rs
use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use node_monitor::{Cli, ConfigManager, HeightMonitor, MonitorError};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("node_monitor=info".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?)
        .add_directive("lettre=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Starting Cosmos node monitor");

    let cli = Cli::parse();
    run(&cli).await?;

    info!("Node monitor stopped");
    Ok(())
}

async fn run(cli: &Cli) -> Result<(), MonitorError> {
    let config_manager = ConfigManager::new(cli).await?;
    let config = config_manager.get_current_config();

    let mut monitor = HeightMonitor::from_config(&config)?;
    monitor
        .start(config.send_test_email, shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
