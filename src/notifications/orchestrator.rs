use super::channels::{ChannelError, EmailSender, SmsSender};
use super::BookingEventKind;
use crate::config::EstateConfig;
use crate::error::Result;
use crate::models::{Booking, Notification, NotificationKind, UserProfile};
use crate::store::{BookingRepository, NotificationStore, PropertyDirectory, UserDirectory};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Human-readable copy for one booking event, shared across channels.
struct MessageCopy {
    title: &'static str,
    message: String,
}

/// Resolves the audience for a booking event, loads each member's channel
/// preferences, and fans out across every enabled channel.
///
/// Channel isolation is the core contract here: the in-app record is always
/// attempted, email and SMS are attempted independently when opted in, and
/// no channel failure suppresses another channel, another audience member,
/// or the dispatch result.
pub struct NotificationOrchestrator {
    bookings: Arc<dyn BookingRepository>,
    properties: Arc<dyn PropertyDirectory>,
    users: Arc<dyn UserDirectory>,
    notifications: Arc<dyn NotificationStore>,
    email: Arc<dyn EmailSender>,
    sms: Arc<dyn SmsSender>,
    channel_timeout: Duration,
}

impl NotificationOrchestrator {
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        properties: Arc<dyn PropertyDirectory>,
        users: Arc<dyn UserDirectory>,
        notifications: Arc<dyn NotificationStore>,
        email: Arc<dyn EmailSender>,
        sms: Arc<dyn SmsSender>,
        config: &EstateConfig,
    ) -> Self {
        Self {
            bookings,
            properties,
            users,
            notifications,
            email,
            sms,
            channel_timeout: config.channel_timeout(),
        }
    }

    /// Fan one booking event out to its audience.
    ///
    /// Fails only when the booking or property cannot be loaded; every
    /// downstream problem is logged and absorbed. At-most-once dispatch per
    /// `(booking, event)` is the calling service's responsibility — the
    /// orchestrator does not deduplicate.
    pub async fn dispatch(&self, booking_id: Uuid, kind: BookingEventKind) -> Result<()> {
        let booking = self.bookings.get(booking_id).await?;
        let property = self.properties.get(booking.property_id).await?;

        // The client who just requested the visit does not need to be told
        // they acted; every later transition informs both parties.
        let audience = match kind {
            BookingEventKind::Created => vec![booking.owner_id],
            _ => vec![booking.client_id, booking.owner_id],
        };

        let copy = message_copy(kind, &property.title, booking.scheduled_at);

        for user_id in audience {
            match self.users.get(user_id).await {
                Ok(user) => self.notify_user(&booking, &user, &copy).await,
                Err(e) => {
                    tracing::warn!(
                        booking_id = %booking_id,
                        user_id = %user_id,
                        error = %e,
                        "Skipping notification for unresolvable user"
                    );
                }
            }
        }

        tracing::debug!(
            booking_id = %booking_id,
            event_kind = %kind,
            "Booking notifications dispatched"
        );

        Ok(())
    }

    /// Deliver one event to one user across every enabled channel.
    async fn notify_user(&self, booking: &Booking, user: &UserProfile, copy: &MessageCopy) {
        // In-app channel cannot be disabled
        let notification = Notification::new(
            user.id,
            NotificationKind::Booking,
            copy.title,
            copy.message.clone(),
            serde_json::json!({
                "booking_id": booking.id,
                "property_id": booking.property_id,
            }),
        );

        if let Err(e) = self.notifications.create(&notification).await {
            tracing::error!(
                booking_id = %booking.id,
                user_id = %user.id,
                error = %e,
                "Failed to create in-app notification"
            );
        }

        let preference_key = NotificationKind::Booking.preference_key();

        if user.preferences.email.is_enabled(preference_key) {
            if let Some(email) = user.email.as_deref() {
                if let Err(e) = self
                    .send_bounded("email", self.email.send_email(email, copy.title, &copy.message))
                    .await
                {
                    tracing::warn!(
                        booking_id = %booking.id,
                        user_id = %user.id,
                        channel = "email",
                        error = %e,
                        "Channel delivery failed"
                    );
                }
            }
        }

        if user.preferences.sms.is_enabled(preference_key) {
            if let Some(phone) = user.phone.as_deref() {
                if let Err(e) = self
                    .send_bounded("sms", self.sms.send_sms(phone, &copy.message))
                    .await
                {
                    tracing::warn!(
                        booking_id = %booking.id,
                        user_id = %user.id,
                        channel = "sms",
                        error = %e,
                        "Channel delivery failed"
                    );
                }
            }
        }
    }

    /// Bound a channel send by the configured timeout; a timeout counts as a
    /// failed send, never as a reason to retry synchronously.
    async fn send_bounded(
        &self,
        channel: &'static str,
        send: impl std::future::Future<Output = std::result::Result<(), ChannelError>>,
    ) -> std::result::Result<(), ChannelError> {
        match tokio::time::timeout(self.channel_timeout, send).await {
            Ok(result) => result,
            Err(_) => Err(ChannelError::Timeout {
                channel,
                timeout_ms: self.channel_timeout.as_millis() as u64,
            }),
        }
    }
}

fn message_copy(kind: BookingEventKind, property_title: &str, scheduled_at: DateTime<Utc>) -> MessageCopy {
    let when = scheduled_at.format("%b %d, %Y at %H:%M UTC");

    match kind {
        BookingEventKind::Created => MessageCopy {
            title: "New Booking Request",
            message: format!("You have a new visit request for {property_title} on {when}."),
        },
        BookingEventKind::Confirmed => MessageCopy {
            title: "Booking Confirmed",
            message: format!("The visit to {property_title} on {when} has been confirmed."),
        },
        BookingEventKind::Cancelled => MessageCopy {
            title: "Booking Cancelled",
            message: format!("The visit to {property_title} on {when} has been cancelled."),
        },
        BookingEventKind::Completed => MessageCopy {
            title: "Booking Completed",
            message: format!("The visit to {property_title} on {when} has been completed."),
        },
    }
}
