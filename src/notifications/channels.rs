//! Channel sender capability traits.
//!
//! Concrete transports (SendGrid, Twilio, ...) live outside the core; the
//! orchestrator only needs the capability to send. Each channel fails
//! independently and failures are caught at the channel boundary.

use async_trait::async_trait;
use thiserror::Error;

/// A failed or timed-out channel send. Logged, never propagated to the
/// caller of the state-changing operation.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("{channel} send timed out after {timeout_ms}ms")]
    Timeout { channel: &'static str, timeout_ms: u64 },

    #[error("{channel} delivery failed: {reason}")]
    Delivery { channel: &'static str, reason: String },
}

impl ChannelError {
    pub fn email(reason: impl Into<String>) -> Self {
        Self::Delivery {
            channel: "email",
            reason: reason.into(),
        }
    }

    pub fn sms(reason: impl Into<String>) -> Self {
        Self::Delivery {
            channel: "sms",
            reason: reason.into(),
        }
    }
}

/// Capability to deliver an email.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), ChannelError>;
}

/// Capability to deliver an SMS.
#[async_trait]
pub trait SmsSender: Send + Sync {
    async fn send_sms(&self, to: &str, text: &str) -> Result<(), ChannelError>;
}

/// Email sender for deployments without a configured provider. Logs and
/// reports success so the channel is effectively skipped.
#[derive(Debug, Default)]
pub struct DisabledEmailSender;

#[async_trait]
impl EmailSender for DisabledEmailSender {
    async fn send_email(&self, to: &str, subject: &str, _body: &str) -> Result<(), ChannelError> {
        tracing::warn!(to, subject, "Email not sent - no email provider configured");
        Ok(())
    }
}

/// SMS sender for deployments without a configured provider.
#[derive(Debug, Default)]
pub struct DisabledSmsSender;

#[async_trait]
impl SmsSender for DisabledSmsSender {
    async fn send_sms(&self, to: &str, _text: &str) -> Result<(), ChannelError> {
        tracing::warn!(to, "SMS not sent - no SMS provider configured");
        Ok(())
    }
}
