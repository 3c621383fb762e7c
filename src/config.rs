use crate::error::{EstateError, Result};
use std::time::Duration;

/// Runtime configuration for the booking core.
///
/// All knobs have conservative defaults and can be overridden through
/// `ESTATE_*` environment variables via [`EstateConfig::from_env`].
#[derive(Debug, Clone)]
pub struct EstateConfig {
    /// Upper bound for a single email/SMS send before it is treated as failed.
    pub channel_timeout_ms: u64,
    /// Capacity of the lifecycle event broadcast channel.
    pub event_channel_capacity: usize,
    /// Default page size for notification listings.
    pub notification_list_limit: usize,
    /// Age in days after which the retention sweep removes notifications.
    pub notification_retention_days: i64,
}

impl Default for EstateConfig {
    fn default() -> Self {
        Self {
            channel_timeout_ms: 5_000,
            event_channel_capacity: 1_000,
            notification_list_limit: 50,
            notification_retention_days: 30,
        }
    }
}

impl EstateConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(timeout) = std::env::var("ESTATE_CHANNEL_TIMEOUT_MS") {
            config.channel_timeout_ms = timeout.parse().map_err(|e| {
                EstateError::ConfigurationError(format!("Invalid channel_timeout_ms: {e}"))
            })?;
        }

        if let Ok(capacity) = std::env::var("ESTATE_EVENT_CHANNEL_CAPACITY") {
            config.event_channel_capacity = capacity.parse().map_err(|e| {
                EstateError::ConfigurationError(format!("Invalid event_channel_capacity: {e}"))
            })?;
        }

        if let Ok(limit) = std::env::var("ESTATE_NOTIFICATION_LIST_LIMIT") {
            config.notification_list_limit = limit.parse().map_err(|e| {
                EstateError::ConfigurationError(format!("Invalid notification_list_limit: {e}"))
            })?;
        }

        if let Ok(days) = std::env::var("ESTATE_NOTIFICATION_RETENTION_DAYS") {
            config.notification_retention_days = days.parse().map_err(|e| {
                EstateError::ConfigurationError(format!("Invalid notification_retention_days: {e}"))
            })?;
        }

        Ok(config)
    }

    /// Channel send timeout as a [`Duration`].
    pub fn channel_timeout(&self) -> Duration {
        Duration::from_millis(self.channel_timeout_ms)
    }
}
