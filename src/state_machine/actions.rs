use super::errors::{ActionError, ActionResult};
use crate::events::publisher::EventPublisher;
use crate::models::Booking;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

/// Trait for implementing post-transition actions.
///
/// Actions run after the transition has been durably persisted; their
/// failures are logged by the state machine, never rolled back into the
/// transition result.
#[async_trait]
pub trait StateAction: Send + Sync {
    /// Execute the action
    async fn execute(
        &self,
        booking: &Booking,
        from_state: &str,
        to_state: &str,
    ) -> ActionResult<()>;

    /// Get a description of this action for logging
    fn description(&self) -> &'static str;
}

/// Action to publish lifecycle events when state transitions occur
pub struct PublishTransitionEventAction {
    event_publisher: EventPublisher,
}

impl PublishTransitionEventAction {
    pub fn new(event_publisher: EventPublisher) -> Self {
        Self { event_publisher }
    }
}

#[async_trait]
impl StateAction for PublishTransitionEventAction {
    async fn execute(
        &self,
        booking: &Booking,
        from_state: &str,
        to_state: &str,
    ) -> ActionResult<()> {
        if let Some(event_name) = determine_booking_event_name(to_state) {
            let context = build_booking_event_context(booking, from_state, to_state);

            self.event_publisher
                .publish(event_name, context)
                .await
                .map_err(|_| ActionError::EventPublishFailed {
                    event_name: event_name.to_string(),
                })?;
        }

        Ok(())
    }

    fn description(&self) -> &'static str {
        "Publish lifecycle event for booking transition"
    }
}

/// Action to record an audit trail entry when a booking is cancelled
pub struct CancellationAuditAction;

#[async_trait]
impl StateAction for CancellationAuditAction {
    async fn execute(
        &self,
        booking: &Booking,
        _from_state: &str,
        to_state: &str,
    ) -> ActionResult<()> {
        if to_state == super::states::BookingState::Cancelled.to_string() {
            tracing::info!(
                booking_id = %booking.id,
                cancelled_by = ?booking.cancelled_by,
                reason = ?booking.cancellation_reason,
                "Booking cancelled"
            );
        }

        Ok(())
    }

    fn description(&self) -> &'static str {
        "Record cancellation audit trail"
    }
}

// Helper functions for event processing

fn determine_booking_event_name(to_state: &str) -> Option<&'static str> {
    match to_state {
        "confirmed" => Some(crate::constants::events::BOOKING_CONFIRMED),
        "cancelled" => Some(crate::constants::events::BOOKING_CANCELLED),
        "completed" => Some(crate::constants::events::BOOKING_COMPLETED),
        _ => None,
    }
}

fn build_booking_event_context(booking: &Booking, from_state: &str, to_state: &str) -> Value {
    serde_json::json!({
        "booking_id": booking.id,
        "property_id": booking.property_id,
        "client_id": booking.client_id,
        "owner_id": booking.owner_id,
        "from_state": from_state,
        "to_state": to_state,
        "scheduled_at": booking.scheduled_at,
        "transitioned_at": Utc::now(),
    })
}
