//! # Structured Logging Module
//!
//! Environment-aware structured logging for the booking core. Channel
//! delivery failures and best-effort side effects are only observable through
//! these logs, so embedders should call [`init_structured_logging`] early.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration.
///
/// Safe to call multiple times; only the first call installs a subscriber.
/// If the host application has already set a global subscriber this becomes
/// a no-op rather than a panic.
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let log_level = get_log_level(&get_environment());

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_filter(EnvFilter::new(log_level)),
        );

        // A global subscriber may already be set by the embedding process.
        let _ = subscriber.try_init();
    });
}

fn get_environment() -> String {
    std::env::var("ESTATE_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

fn get_log_level(environment: &str) -> String {
    if let Ok(level) = std::env::var("RUST_LOG") {
        return level;
    }

    match environment {
        "production" => "info".to_string(),
        "test" => "warn".to_string(),
        _ => "debug".to_string(),
    }
}
