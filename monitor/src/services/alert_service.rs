// File: monitor/src/services/alert_service.rs
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::SmtpConfig;
use crate::errors::NotifyError;

/// Single send primitive used by the monitor.
///
/// Returns `true` only when the transport accepted the message. Failures are
/// logged and reported as `false`; implementations never panic or propagate
/// errors, and never retry.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, subject: &str, body: &str) -> bool;
}

/// Plain-text email over SMTP with STARTTLS
pub struct EmailNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
    server: String,
    timeout: Duration,
}

impl EmailNotifier {
    pub fn new(config: &SmtpConfig) -> Result<Self, NotifyError> {
        let from = parse_mailbox(&config.from_email)?;
        let to = parse_mailbox(&config.to_email)?;
        let session_timeout = Duration::from_secs(config.timeout_seconds);

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.server)
            .map_err(|e| NotifyError::TransportSetup {
                server: config.server.clone(),
                reason: e.to_string(),
            })?
            .port(config.port)
            .timeout(Some(session_timeout));

        if let Some(username) = &config.username {
            debug!("Using SMTP authentication as {}", username);
            builder = builder.credentials(Credentials::new(
                username.clone(),
                config.password.clone().unwrap_or_default(),
            ));
        }

        Ok(Self {
            transport: builder.build(),
            from,
            to,
            server: format!("{}:{}", config.server, config.port),
            timeout: session_timeout,
        })
    }

    pub fn recipient(&self) -> &Mailbox {
        &self.to
    }

    /// One delivery attempt, with the failure reason preserved
    pub async fn try_send(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| NotifyError::MessageBuild {
                reason: e.to_string(),
            })?;

        match timeout(self.timeout, self.transport.send(message)).await {
            Ok(Ok(response)) if response.is_positive() => Ok(()),
            Ok(Ok(response)) => Err(NotifyError::SendFailed {
                server: self.server.clone(),
                reason: format!("server replied {}", response.code()),
            }),
            Ok(Err(e)) => Err(NotifyError::SendFailed {
                server: self.server.clone(),
                reason: e.to_string(),
            }),
            Err(_) => Err(NotifyError::Timeout {
                server: self.server.clone(),
            }),
        }
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn send(&self, subject: &str, body: &str) -> bool {
        match self.try_send(subject, body).await {
            Ok(()) => {
                info!("Email '{}' sent to {}", subject, self.to);
                true
            }
            Err(e) => {
                warn!("Failed to send email '{}'. Error: {}", subject, e);
                false
            }
        }
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| NotifyError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}
