//! # Booking Service
//!
//! Owns the booking lifecycle: creation, reads, and the single mutating
//! entry point for all state changes. Persistence goes through the
//! repository collaborator; transitions go through the state machine;
//! notification dispatch and the inquiry counter are best-effort side
//! effects that can never fail a booking operation.

use crate::error::{EstateError, Result};
use crate::events::publisher::EventPublisher;
use crate::models::{Actor, Booking, BookingUpdate, NewBooking, UserRole};
use crate::notifications::{BookingEventKind, BookingNotifier};
use crate::state_machine::{BookingEvent, BookingState, BookingStateMachine};
use crate::store::{BookingRepository, PropertyDirectory};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct BookingService {
    bookings: Arc<dyn BookingRepository>,
    properties: Arc<dyn PropertyDirectory>,
    event_publisher: EventPublisher,
    notifier: Arc<dyn BookingNotifier>,
}

impl BookingService {
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        properties: Arc<dyn PropertyDirectory>,
        event_publisher: EventPublisher,
        notifier: Arc<dyn BookingNotifier>,
    ) -> Self {
        Self {
            bookings,
            properties,
            event_publisher,
            notifier,
        }
    }

    /// Create a visit request for a property.
    ///
    /// The owner id is resolved from the property record, never taken from
    /// the caller. The inquiry counter increment is best-effort; the booking
    /// is created even when it fails.
    pub async fn create_booking(&self, client_id: Uuid, data: NewBooking) -> Result<Booking> {
        let property = self.properties.get(data.property_id).await?;

        if data.scheduled_at <= Utc::now() {
            return Err(EstateError::InvalidArgument(
                "Scheduled time must be in the future".to_string(),
            ));
        }

        let now = Utc::now();
        let booking = Booking {
            id: Uuid::new_v4(),
            property_id: data.property_id,
            client_id,
            owner_id: property.owner_id,
            scheduled_at: data.scheduled_at,
            status: BookingState::Requested,
            notes: data.notes,
            cancellation_reason: None,
            cancelled_by: None,
            created_at: now,
            updated_at: now,
            confirmed_at: None,
            completed_at: None,
        };

        self.bookings.create(&booking).await?;

        if let Err(e) = self
            .properties
            .adjust_inquiry_count(booking.property_id, 1)
            .await
        {
            tracing::warn!(
                booking_id = %booking.id,
                property_id = %booking.property_id,
                error = %e,
                "Failed to increment inquiry counter"
            );
        }

        if let Err(e) = self
            .event_publisher
            .publish(
                crate::constants::events::BOOKING_REQUESTED,
                serde_json::json!({
                    "booking_id": booking.id,
                    "property_id": booking.property_id,
                    "client_id": booking.client_id,
                    "owner_id": booking.owner_id,
                    "scheduled_at": booking.scheduled_at,
                }),
            )
            .await
        {
            tracing::warn!(booking_id = %booking.id, error = %e, "Failed to publish lifecycle event");
        }

        self.notifier
            .notify(booking.id, BookingEventKind::Created)
            .await;

        tracing::info!(booking_id = %booking.id, "Booking created");
        Ok(booking)
    }

    /// Read one booking; access is restricted to the two parties and admins.
    pub async fn get_booking(&self, booking_id: Uuid, actor: &Actor) -> Result<Booking> {
        let booking = self.bookings.get(booking_id).await?;

        if !booking.is_party(actor.user_id) && actor.role != UserRole::Admin {
            return Err(EstateError::Forbidden(
                "You do not have access to this booking".to_string(),
            ));
        }

        Ok(booking)
    }

    /// List the caller's bookings, newest visit first.
    pub async fn list_bookings(&self, actor: &Actor) -> Result<Vec<Booking>> {
        Ok(self.bookings.list_by_user(actor.user_id, actor.role).await?)
    }

    /// The single mutating entry point for all lifecycle changes.
    ///
    /// Validation order follows the update contract: existence, party
    /// membership, transition legality and per-transition authorization
    /// (delegated to the state machine), then the reschedule window. On any
    /// failure nothing is persisted and nothing is dispatched; on success
    /// exactly one notification event is fired, detached, after the write.
    pub async fn update_booking(
        &self,
        booking_id: Uuid,
        actor: &Actor,
        updates: BookingUpdate,
    ) -> Result<Booking> {
        let mut booking = self.bookings.get(booking_id).await?;

        if !booking.is_party(actor.user_id) {
            return Err(EstateError::Forbidden(
                "You do not have access to this booking".to_string(),
            ));
        }

        if updates.is_empty() {
            return Ok(booking);
        }

        // Time may only be renegotiated before confirmation
        if let Some(scheduled_at) = updates.scheduled_at {
            if !booking.status.allows_reschedule() {
                return Err(EstateError::InvalidStateTransition(
                    "Can only modify time for requested bookings".to_string(),
                ));
            }
            booking.scheduled_at = scheduled_at;
        }

        let Some(target_status) = updates.status else {
            // Reschedule-only update: persist directly, no state transition
            booking.updated_at = Utc::now();
            self.bookings.update(&booking).await?;

            if let Err(e) = self
                .event_publisher
                .publish(
                    crate::constants::events::BOOKING_RESCHEDULED,
                    serde_json::json!({
                        "booking_id": booking.id,
                        "scheduled_at": booking.scheduled_at,
                    }),
                )
                .await
            {
                tracing::warn!(booking_id = %booking.id, error = %e, "Failed to publish lifecycle event");
            }

            tracing::info!(booking_id = %booking.id, "Booking rescheduled");
            return Ok(booking);
        };

        let (event, kind) = match target_status {
            BookingState::Confirmed => (BookingEvent::Confirm, BookingEventKind::Confirmed),
            BookingState::Completed => (BookingEvent::Complete, BookingEventKind::Completed),
            BookingState::Cancelled => (
                BookingEvent::Cancel(updates.cancellation_reason),
                BookingEventKind::Cancelled,
            ),
            BookingState::Requested => {
                return Err(EstateError::InvalidStateTransition(
                    format!("Cannot transition from {} to requested", booking.status),
                ))
            }
        };

        // The machine validates the transition table and authorization
        // guards, stamps the transition fields, and persists the whole
        // record in one update (any pending reschedule included).
        let mut machine = BookingStateMachine::new(
            booking,
            self.bookings.clone(),
            self.event_publisher.clone(),
        );
        let updated = machine.transition(actor, event).await?;

        // Dispatched exactly once, only after the persisted update succeeded
        self.notifier.notify(updated.id, kind).await;

        tracing::info!(booking_id = %updated.id, status = %updated.status, "Booking updated");
        Ok(updated)
    }
}
