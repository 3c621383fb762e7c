//! # Booking Model
//!
//! A booking is one client's request to visit a property at a specific time,
//! tracked through a fixed lifecycle (`requested → confirmed → completed`,
//! with `cancelled` reachable from either non-terminal state).
//!
//! The record is jointly owned by `client_id` and `owner_id`: both may read
//! it, and lifecycle writes are gated per transition by the state machine
//! guards. All lifecycle mutation flows through `BookingService`; no other
//! code path writes a booking.

use crate::state_machine::states::BookingState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A requested/granted property visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Opaque unique identifier, assigned at creation, immutable.
    pub id: Uuid,
    pub property_id: Uuid,
    pub client_id: Uuid,
    /// Copied from the property record at creation, never caller-supplied.
    pub owner_id: Uuid,
    /// Proposed/confirmed visit time; mutable only while `requested`.
    pub scheduled_at: DateTime<Utc>,
    pub status: BookingState,
    /// Optional free text, immutable after creation.
    pub notes: Option<String>,
    /// Set only on transition into `cancelled`.
    pub cancellation_reason: Option<String>,
    /// Set only on transition into `cancelled`.
    pub cancelled_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Stamped exactly once, on transition into `confirmed`.
    pub confirmed_at: Option<DateTime<Utc>>,
    /// Stamped exactly once, on transition into `completed`.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// Whether the given user is one of the two booking parties.
    pub fn is_party(&self, user_id: Uuid) -> bool {
        self.client_id == user_id || self.owner_id == user_id
    }
}

/// Input for booking creation. The acting client id comes from the
/// authenticated caller, not from this payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    pub property_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Input for the single mutating entry point.
///
/// `notes` is deliberately absent: notes are immutable after creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingUpdate {
    pub status: Option<BookingState>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub cancellation_reason: Option<String>,
}

impl BookingUpdate {
    /// True when the update carries nothing to apply.
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.scheduled_at.is_none()
    }
}

/// The authenticated caller of a booking operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: Uuid,
    pub role: crate::models::user::UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRole;

    #[test]
    fn test_is_party() {
        let client = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let booking = Booking {
            id: Uuid::new_v4(),
            property_id: Uuid::new_v4(),
            client_id: client,
            owner_id: owner,
            scheduled_at: Utc::now(),
            status: BookingState::Requested,
            notes: None,
            cancellation_reason: None,
            cancelled_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            confirmed_at: None,
            completed_at: None,
        };

        assert!(booking.is_party(client));
        assert!(booking.is_party(owner));
        assert!(!booking.is_party(Uuid::new_v4()));
    }

    #[test]
    fn test_empty_update() {
        let update = BookingUpdate::default();
        assert!(update.is_empty());

        let update = BookingUpdate {
            scheduled_at: Some(Utc::now()),
            ..Default::default()
        };
        assert!(!update.is_empty());

        let _ = Actor {
            user_id: Uuid::new_v4(),
            role: UserRole::Client,
        };
    }
}
