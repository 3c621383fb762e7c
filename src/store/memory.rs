//! In-memory store implementations backed by `DashMap`.
//!
//! Used by the test suite and by embedders that want the booking core without
//! an external document store. The counter implementation uses the same
//! read-modify-write pattern an external store would, including the clamp
//! at zero.

use super::{
    BookingRepository, NotificationStore, PropertyDirectory, StoreError, StoreResult,
    UserDirectory,
};
use crate::models::{Booking, Notification, PropertySummary, UserProfile, UserRole};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

/// Booking records keyed by id.
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    bookings: DashMap<Uuid, Booking>,
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, booking: &Booking) -> StoreResult<()> {
        self.bookings.insert(booking.id, booking.clone());
        Ok(())
    }

    async fn get(&self, id: Uuid) -> StoreResult<Booking> {
        self.bookings
            .get(&id)
            .map(|entry| entry.clone())
            .ok_or_else(|| StoreError::not_found("booking", id))
    }

    async fn update(&self, booking: &Booking) -> StoreResult<()> {
        if !self.bookings.contains_key(&booking.id) {
            return Err(StoreError::not_found("booking", booking.id));
        }

        // Whole-record replacement, last write wins
        self.bookings.insert(booking.id, booking.clone());
        Ok(())
    }

    async fn list_by_user(&self, user_id: Uuid, role: UserRole) -> StoreResult<Vec<Booking>> {
        let mut bookings: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|entry| match role {
                UserRole::Client => entry.client_id == user_id,
                UserRole::Owner | UserRole::Agent => entry.owner_id == user_id,
                UserRole::Admin => true,
            })
            .map(|entry| entry.clone())
            .collect();

        bookings.sort_by(|a, b| b.scheduled_at.cmp(&a.scheduled_at));
        Ok(bookings)
    }
}

/// Property summaries plus the advisory inquiry counter.
#[derive(Debug, Default)]
pub struct InMemoryPropertyDirectory {
    properties: DashMap<Uuid, PropertySummary>,
    inquiry_counts: DashMap<Uuid, i64>,
}

impl InMemoryPropertyDirectory {
    /// Seed a property into the directory.
    pub fn insert(&self, property: PropertySummary) {
        self.properties.insert(property.id, property);
    }

    /// Current inquiry counter value (0 when never adjusted).
    pub fn inquiry_count(&self, property_id: Uuid) -> i64 {
        self.inquiry_counts
            .get(&property_id)
            .map(|entry| *entry)
            .unwrap_or(0)
    }
}

#[async_trait]
impl PropertyDirectory for InMemoryPropertyDirectory {
    async fn get(&self, property_id: Uuid) -> StoreResult<PropertySummary> {
        self.properties
            .get(&property_id)
            .map(|entry| entry.clone())
            .ok_or_else(|| StoreError::not_found("property", property_id))
    }

    async fn adjust_inquiry_count(&self, property_id: Uuid, delta: i64) -> StoreResult<()> {
        if !self.properties.contains_key(&property_id) {
            return Err(StoreError::not_found("property", property_id));
        }

        // Read current value (missing means 0), add delta, write back.
        // Decrements clamp at zero, never negative.
        let mut entry = self.inquiry_counts.entry(property_id).or_insert(0);
        *entry = (*entry + delta).max(0);
        Ok(())
    }
}

/// User profiles keyed by id.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: DashMap<Uuid, UserProfile>,
}

impl InMemoryUserDirectory {
    /// Seed a user into the directory.
    pub fn insert(&self, user: UserProfile) {
        self.users.insert(user.id, user);
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn get(&self, user_id: Uuid) -> StoreResult<UserProfile> {
        self.users
            .get(&user_id)
            .map(|entry| entry.clone())
            .ok_or_else(|| StoreError::not_found("user", user_id))
    }
}

/// Notification records keyed by id.
#[derive(Debug, Default)]
pub struct InMemoryNotificationStore {
    notifications: DashMap<Uuid, Notification>,
}

#[async_trait]
impl NotificationStore for InMemoryNotificationStore {
    async fn create(&self, notification: &Notification) -> StoreResult<()> {
        self.notifications
            .insert(notification.id, notification.clone());
        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        unread_only: bool,
        limit: usize,
    ) -> StoreResult<Vec<Notification>> {
        let mut notifications: Vec<Notification> = self
            .notifications
            .iter()
            .filter(|entry| entry.user_id == user_id && (!unread_only || !entry.read))
            .map(|entry| entry.clone())
            .collect();

        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notifications.truncate(limit);
        Ok(notifications)
    }

    async fn unread_count(&self, user_id: Uuid) -> StoreResult<usize> {
        Ok(self
            .notifications
            .iter()
            .filter(|entry| entry.user_id == user_id && !entry.read)
            .count())
    }

    async fn mark_read(&self, user_id: Uuid, notification_id: Uuid) -> StoreResult<()> {
        match self.notifications.get_mut(&notification_id) {
            Some(mut entry) if entry.user_id == user_id => {
                entry.read = true;
                Ok(())
            }
            // An id owned by someone else is indistinguishable from absent
            _ => Err(StoreError::not_found("notification", notification_id)),
        }
    }

    async fn mark_all_read(&self, user_id: Uuid) -> StoreResult<usize> {
        let mut flipped = 0;
        for mut entry in self.notifications.iter_mut() {
            if entry.user_id == user_id && !entry.read {
                entry.read = true;
                flipped += 1;
            }
        }
        Ok(flipped)
    }

    async fn delete(&self, user_id: Uuid, notification_id: Uuid) -> StoreResult<()> {
        let owned = self
            .notifications
            .get(&notification_id)
            .map(|entry| entry.user_id == user_id);

        match owned {
            Some(true) => {
                self.notifications.remove(&notification_id);
                Ok(())
            }
            Some(false) => Err(StoreError::not_found("notification", notification_id)),
            // Deleting an absent record is a no-op
            None => Ok(()),
        }
    }

    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> StoreResult<usize> {
        let before = self.notifications.len();
        self.notifications.retain(|_, n| n.created_at >= cutoff);
        Ok(before - self.notifications.len())
    }
}
