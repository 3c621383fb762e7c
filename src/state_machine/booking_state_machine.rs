use super::{
    actions::{CancellationAuditAction, PublishTransitionEventAction, StateAction},
    errors::{StateMachineError, StateMachineResult},
    events::BookingEvent,
    guards::{BookingPartyGuard, OwnerCompletesGuard, OwnerConfirmsGuard, StateGuard},
    states::BookingState,
};
use crate::events::publisher::EventPublisher;
use crate::models::{Actor, Booking};
use crate::store::BookingRepository;
use chrono::Utc;
use std::sync::Arc;

/// Resolve the target state for an event against the valid-transition table.
///
/// This is the single source of truth for the booking lifecycle graph:
/// `requested → confirmed | cancelled`, `confirmed → completed | cancelled`,
/// terminal states have no outgoing edges.
pub fn next_state(current: BookingState, event: &BookingEvent) -> StateMachineResult<BookingState> {
    let target = match (current, event) {
        (BookingState::Requested, BookingEvent::Confirm) => BookingState::Confirmed,
        (BookingState::Requested, BookingEvent::Cancel(_)) => BookingState::Cancelled,
        (BookingState::Confirmed, BookingEvent::Complete) => BookingState::Completed,
        (BookingState::Confirmed, BookingEvent::Cancel(_)) => BookingState::Cancelled,

        (from_state, event) => {
            return Err(StateMachineError::InvalidTransition {
                from: from_state.to_string(),
                to: event.event_type().to_string(),
            })
        }
    };

    Ok(target)
}

/// State machine driving one booking through its lifecycle.
///
/// Transitions are validated against the table, gated by actor authorization
/// guards, persisted as a single whole-record update (last-write-wins), and
/// followed by post-transition actions whose failures are logged but never
/// unwound into the transition result.
pub struct BookingStateMachine {
    booking: Booking,
    repository: Arc<dyn BookingRepository>,
    event_publisher: EventPublisher,
}

impl BookingStateMachine {
    /// Create a new state machine instance for one booking
    pub fn new(
        booking: Booking,
        repository: Arc<dyn BookingRepository>,
        event_publisher: EventPublisher,
    ) -> Self {
        Self {
            booking,
            repository,
            event_publisher,
        }
    }

    /// Get the current state of the booking
    pub fn current_state(&self) -> BookingState {
        self.booking.status
    }

    /// Attempt to transition the booking state on behalf of the actor.
    ///
    /// On success the updated booking has been persisted and is returned;
    /// on any failure no side effects have occurred.
    pub async fn transition(
        &mut self,
        actor: &Actor,
        event: BookingEvent,
    ) -> StateMachineResult<Booking> {
        let current_state = self.booking.status;
        let target_state = next_state(current_state, &event)?;

        self.check_guards(actor, target_state).await?;

        let updated = self.apply(actor, &event, target_state);

        self.repository
            .update(&updated)
            .await
            .map_err(|e| StateMachineError::Persistence(e.to_string()))?;

        self.booking = updated.clone();

        self.execute_actions(current_state, target_state).await;

        Ok(updated)
    }

    /// Check guard conditions for the transition
    async fn check_guards(
        &self,
        actor: &Actor,
        target_state: BookingState,
    ) -> StateMachineResult<()> {
        BookingPartyGuard.check(&self.booking, actor).await?;

        match target_state {
            BookingState::Confirmed => {
                OwnerConfirmsGuard.check(&self.booking, actor).await?;
            }
            BookingState::Completed => {
                OwnerCompletesGuard.check(&self.booking, actor).await?;
            }
            // Cancellation is open to both parties
            _ => {}
        }

        Ok(())
    }

    /// Build the updated record with transition stamps applied.
    /// Each stamp is set exactly once, at its corresponding transition.
    fn apply(&self, actor: &Actor, event: &BookingEvent, target_state: BookingState) -> Booking {
        let now = Utc::now();
        let mut updated = self.booking.clone();

        updated.status = target_state;
        updated.updated_at = now;

        match target_state {
            BookingState::Confirmed => {
                updated.confirmed_at = Some(now);
            }
            BookingState::Completed => {
                updated.completed_at = Some(now);
            }
            BookingState::Cancelled => {
                updated.cancelled_by = Some(actor.user_id);
                if let Some(reason) = event.cancellation_reason() {
                    updated.cancellation_reason = Some(reason.to_string());
                }
            }
            BookingState::Requested => {}
        }

        updated
    }

    /// Execute actions after a successful, persisted transition
    async fn execute_actions(&self, from_state: BookingState, to_state: BookingState) {
        let actions: Vec<Box<dyn StateAction>> = vec![
            Box::new(PublishTransitionEventAction::new(
                self.event_publisher.clone(),
            )),
            Box::new(CancellationAuditAction),
        ];

        let from = from_state.to_string();
        let to = to_state.to_string();

        for action in actions {
            if let Err(e) = action.execute(&self.booking, &from, &to).await {
                tracing::warn!(
                    booking_id = %self.booking.id,
                    action = action.description(),
                    error = %e,
                    "Post-transition action failed"
                );
            }
        }
    }

    /// Check if the booking is in a terminal state
    pub fn is_terminal(&self) -> bool {
        self.booking.status.is_terminal()
    }

    /// Get booking information
    pub fn booking(&self) -> &Booking {
        &self.booking
    }
}
