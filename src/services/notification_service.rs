//! # Notification Service
//!
//! User-facing surface over the notification store: listing, unread counts,
//! read-state transitions, deletion, and the advisory retention sweep. All
//! operations are scoped to the calling user's own records.

use crate::config::EstateConfig;
use crate::constants::notifications::MAX_LIST_LIMIT;
use crate::error::Result;
use crate::models::Notification;
use crate::store::NotificationStore;
use chrono::{Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

pub struct NotificationService {
    notifications: Arc<dyn NotificationStore>,
    config: EstateConfig,
}

impl NotificationService {
    pub fn new(notifications: Arc<dyn NotificationStore>, config: EstateConfig) -> Self {
        Self {
            notifications,
            config,
        }
    }

    /// List the user's notifications, newest first. A missing limit falls
    /// back to the configured default; all limits are capped.
    pub async fn list(
        &self,
        user_id: Uuid,
        unread_only: bool,
        limit: Option<usize>,
    ) -> Result<Vec<Notification>> {
        let limit = limit
            .unwrap_or(self.config.notification_list_limit)
            .min(MAX_LIST_LIMIT);

        Ok(self
            .notifications
            .list_for_user(user_id, unread_only, limit)
            .await?)
    }

    pub async fn unread_count(&self, user_id: Uuid) -> Result<usize> {
        Ok(self.notifications.unread_count(user_id).await?)
    }

    /// Mark one notification as read. Idempotent: an already-read record is
    /// a no-op, not an error.
    pub async fn mark_read(&self, user_id: Uuid, notification_id: Uuid) -> Result<()> {
        Ok(self.notifications.mark_read(user_id, notification_id).await?)
    }

    /// Mark all of the user's unread notifications as read; returns how many
    /// were flipped.
    pub async fn mark_all_read(&self, user_id: Uuid) -> Result<usize> {
        Ok(self.notifications.mark_all_read(user_id).await?)
    }

    /// Delete one notification owned by the user.
    pub async fn delete(&self, user_id: Uuid, notification_id: Uuid) -> Result<()> {
        Ok(self.notifications.delete(user_id, notification_id).await?)
    }

    /// Retention sweep removing notifications older than the configured
    /// window. Advisory only; correctness never depends on it running.
    pub async fn cleanup_old(&self) -> Result<usize> {
        let cutoff = Utc::now() - Duration::days(self.config.notification_retention_days);
        let removed = self.notifications.delete_older_than(cutoff).await?;

        if removed > 0 {
            tracing::info!(removed, "Notification retention sweep completed");
        }

        Ok(removed)
    }
}
