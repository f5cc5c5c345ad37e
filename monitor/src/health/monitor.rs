// File: monitor/src/health/monitor.rs
use super::cosmos::CosmosHeightSource;
use super::state::{AlertKind, AlertState};
use super::types::{HeightSource, PollOutcome};
use crate::config::{Config, NodeConfig};
use crate::constants::{self, subjects};
use crate::errors::MonitorError;
use crate::services::{EmailNotifier, Notifier};
use std::future::Future;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

/// What a single monitoring cycle did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleResult {
    /// Nothing to report, or the condition was already reported
    Quiet,
    /// Alert accepted by the notifier
    Notified(AlertKind),
    /// Alert due but the notifier refused it; retried next cycle
    NotifyFailed(AlertKind),
}

/// Polls one node on a fixed interval and emails when it stalls or goes down.
///
/// The monitor owns its [`AlertState`]; nothing else mutates it, so no locking
/// is involved. Cycles never overlap.
pub struct HeightMonitor<S, N> {
    source: S,
    notifier: N,
    node: NodeConfig,
    interval: Duration,
    state: AlertState,
    check_count: u64,
}

impl<S, N> HeightMonitor<S, N>
where
    S: HeightSource,
    N: Notifier,
{
    /// Intervals below one second are raised to one second.
    pub fn new(source: S, notifier: N, node: NodeConfig, interval: Duration) -> Self {
        let min_interval = Duration::from_millis(constants::monitor::MIN_CHECK_INTERVAL_MILLIS);
        if interval < min_interval {
            warn!(
                "Check interval {:?} is too short, using {:?}",
                interval, min_interval
            );
        }

        Self {
            source,
            notifier,
            node,
            interval: interval.max(min_interval),
            state: AlertState::new(),
            check_count: 0,
        }
    }

    pub fn state(&self) -> &AlertState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn check_count(&self) -> u64 {
        self.check_count
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Send the startup smoke-test notification; fails if the notifier refuses it
    pub async fn send_test_notification(&self) -> Result<(), MonitorError> {
        let body = format!(
            "This is a test email from the Cosmos node monitor script. \
             It is configured to monitor {}.",
            self.node.address()
        );

        if self.notifier.send(subjects::TEST, &body).await {
            info!("Test notification sent successfully");
            Ok(())
        } else {
            error!("Test notification failed");
            Err(MonitorError::TestNotificationFailed {
                target: self.node.address(),
            })
        }
    }

    /// Fetch, classify, and notify if due. Runs to completion once started.
    pub async fn run_cycle(&mut self) -> CycleResult {
        self.check_count += 1;

        let outcome = self.source.fetch().await;
        match &outcome {
            PollOutcome::Height(height) => {
                debug!("Node {} at height {}", self.node.address(), height)
            }
            PollOutcome::FetchError(e) => {
                warn!("Failed to query node {}: {}", self.node.address(), e)
            }
        }

        let Some(alert) = self.state.observe(&outcome) else {
            return CycleResult::Quiet;
        };

        let body = alert.body(&self.node);
        warn!("{}: {}", alert.subject(), body);

        if self.notifier.send(alert.subject(), &body).await {
            self.state.mark_notified(&alert);
            info!("Notification sent for {}", self.node.address());
            CycleResult::Notified(alert)
        } else {
            warn!(
                "Notification for {} was not sent, retrying next check",
                self.node.address()
            );
            CycleResult::NotifyFailed(alert)
        }
    }

    /// Run cycles until `shutdown` resolves.
    ///
    /// The first cycle starts immediately; each following one starts a full
    /// interval after the previous one finished. Shutdown is only observed
    /// between cycles.
    pub async fn run<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        info!(
            "Monitoring {} every {}s",
            self.node.address(),
            self.interval.as_secs()
        );

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!("Stopping monitor after {} checks", self.check_count);
                    break;
                }
                _ = ticker.tick() => {
                    self.run_cycle().await;
                    ticker.reset();

                    if self.check_count.is_multiple_of(constants::monitor::CYCLE_LOG_EVERY) {
                        info!(
                            "Monitoring cycle #{} - last height {:?}, stalled {:?}, down {:?}",
                            self.check_count,
                            self.state.last_height(),
                            self.state.stalled(),
                            self.state.down()
                        );
                    }
                }
            }
        }
    }

    /// Optional smoke test, then the monitoring loop. Nothing is polled if the
    /// smoke test fails.
    pub async fn start<F>(&mut self, send_test_email: bool, shutdown: F) -> Result<(), MonitorError>
    where
        F: Future<Output = ()>,
    {
        if send_test_email {
            self.send_test_notification().await?;
        }

        self.run(shutdown).await;
        Ok(())
    }
}

impl HeightMonitor<CosmosHeightSource, EmailNotifier> {
    /// Build the production monitor: Tendermint RPC source and SMTP notifier.
    pub fn from_config(config: &Config) -> Result<Self, MonitorError> {
        let source =
            CosmosHeightSource::new(&config.node).map_err(|e| MonitorError::HttpClient {
                reason: e.to_string(),
            })?;
        info!("Height source ready: {}", source.status_url());

        let notifier = EmailNotifier::new(&config.smtp)?;
        info!("Email notifier ready, alerts go to {}", notifier.recipient());

        Ok(Self::new(
            source,
            notifier,
            config.node.clone(),
            Duration::from_secs(config.check_interval_seconds),
        ))
    }
}
