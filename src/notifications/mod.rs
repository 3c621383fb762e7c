//! Notification orchestration: audience resolution, preference checks, and
//! multi-channel fan-out for booking lifecycle events.
//!
//! The orchestrator is always invoked behind the [`BookingNotifier`] seam so
//! that delivery failure is structurally incapable of failing the booking
//! operation that triggered it.

pub mod channels;
pub mod orchestrator;

pub use channels::{ChannelError, DisabledEmailSender, DisabledSmsSender, EmailSender, SmsSender};
pub use orchestrator::NotificationOrchestrator;

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// The booking domain events that produce notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingEventKind {
    Created,
    Confirmed,
    Cancelled,
    Completed,
}

impl fmt::Display for BookingEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Fire-and-forget seam between the booking service and the orchestrator.
///
/// `notify` must be called exactly once per successful state change; the
/// orchestrator itself does not deduplicate. Implementations never surface
/// errors — delivery is best-effort and failures are logged.
#[async_trait]
pub trait BookingNotifier: Send + Sync {
    async fn notify(&self, booking_id: Uuid, kind: BookingEventKind);
}

/// Runs dispatch as a detached task so the caller's response is never
/// blocked on channel latency.
pub struct DetachedNotifier {
    orchestrator: Arc<NotificationOrchestrator>,
}

impl DetachedNotifier {
    pub fn new(orchestrator: Arc<NotificationOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

#[async_trait]
impl BookingNotifier for DetachedNotifier {
    async fn notify(&self, booking_id: Uuid, kind: BookingEventKind) {
        let orchestrator = self.orchestrator.clone();
        tokio::spawn(async move {
            if let Err(e) = orchestrator.dispatch(booking_id, kind).await {
                tracing::error!(
                    booking_id = %booking_id,
                    event_kind = %kind,
                    error = %e,
                    "Detached notification dispatch failed"
                );
            }
        });
    }
}

/// Awaits dispatch before returning. Useful where the calling convention
/// needs deterministic delivery ordering (tests, batch backfills).
pub struct InlineNotifier {
    orchestrator: Arc<NotificationOrchestrator>,
}

impl InlineNotifier {
    pub fn new(orchestrator: Arc<NotificationOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

#[async_trait]
impl BookingNotifier for InlineNotifier {
    async fn notify(&self, booking_id: Uuid, kind: BookingEventKind) {
        if let Err(e) = self.orchestrator.dispatch(booking_id, kind).await {
            tracing::error!(
                booking_id = %booking_id,
                event_kind = %kind,
                error = %e,
                "Notification dispatch failed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_display() {
        assert_eq!(BookingEventKind::Created.to_string(), "created");
        assert_eq!(BookingEventKind::Completed.to_string(), "completed");
    }
}
