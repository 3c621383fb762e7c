//! Collaborator store interfaces consumed by the booking core.
//!
//! The persistent store itself is external; the core talks to it through
//! these capability traits. Semantics the core relies on: booking updates are
//! whole-record writes with last-write-wins, and the inquiry counter is an
//! advisory read-modify-write value clamped at zero.

pub mod memory;

use crate::models::{Booking, Notification, PropertySummary, UserProfile, UserRole};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by store collaborators
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Store backend failure: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Create/read/update access to booking records.
///
/// `update` replaces the whole record; the store offers no optimistic-lock
/// primitive, so concurrent writers race and the later write wins.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &Booking) -> StoreResult<()>;

    async fn get(&self, id: Uuid) -> StoreResult<Booking>;

    async fn update(&self, booking: &Booking) -> StoreResult<()>;

    /// Bookings where the user is the client (role `client`) or the owner
    /// (roles `owner`/`agent`), ordered by `scheduled_at` descending.
    /// Admin callers bypass the filter.
    async fn list_by_user(&self, user_id: Uuid, role: UserRole) -> StoreResult<Vec<Booking>>;
}

/// Read access to the property catalog plus the advisory inquiry counter.
#[async_trait]
pub trait PropertyDirectory: Send + Sync {
    async fn get(&self, property_id: Uuid) -> StoreResult<PropertySummary>;

    /// Adjust the property's inquiry counter by `delta`, clamping at zero.
    /// Best-effort: callers log failures instead of propagating them.
    async fn adjust_inquiry_count(&self, property_id: Uuid, delta: i64) -> StoreResult<()>;
}

/// Read access to user contact points and channel preferences.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn get(&self, user_id: Uuid) -> StoreResult<UserProfile>;
}

/// Persistence for in-app notification records.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn create(&self, notification: &Notification) -> StoreResult<()>;

    /// Newest first, bounded by `limit`.
    async fn list_for_user(
        &self,
        user_id: Uuid,
        unread_only: bool,
        limit: usize,
    ) -> StoreResult<Vec<Notification>>;

    async fn unread_count(&self, user_id: Uuid) -> StoreResult<usize>;

    /// Idempotent: marking an already-read notification is a no-op.
    async fn mark_read(&self, user_id: Uuid, notification_id: Uuid) -> StoreResult<()>;

    /// Returns the number of notifications flipped to read.
    async fn mark_all_read(&self, user_id: Uuid) -> StoreResult<usize>;

    /// Idempotent: deleting an absent notification is a no-op.
    async fn delete(&self, user_id: Uuid, notification_id: Uuid) -> StoreResult<()>;

    /// Retention sweep; returns the number of records removed.
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> StoreResult<usize>;
}
