//! End-to-end booking lifecycle: a client requests a visit, the owner
//! confirms and completes it, and every party sees the right notifications
//! on the right channels along the way.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use estate_core::config::EstateConfig;
use estate_core::events::EventPublisher;
use estate_core::models::{
    Actor, ChannelOptIn, NewBooking, NotificationPreferences, PropertySummary, UserProfile,
};
use estate_core::notifications::{
    ChannelError, DetachedNotifier, EmailSender, InlineNotifier, NotificationOrchestrator,
    SmsSender,
};
use estate_core::services::{BookingService, NotificationService};
use estate_core::store::memory::{
    InMemoryBookingRepository, InMemoryNotificationStore, InMemoryPropertyDirectory,
    InMemoryUserDirectory,
};
use estate_core::store::NotificationStore;
use estate_core::{BookingState, BookingUpdate, EstateError, UserRole};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Default)]
struct RecordingEmailSender {
    sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send_email(&self, to: &str, subject: &str, _body: &str) -> Result<(), ChannelError> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string()));
        Ok(())
    }
}

#[derive(Default)]
struct RecordingSmsSender {
    sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl SmsSender for RecordingSmsSender {
    async fn send_sms(&self, to: &str, text: &str) -> Result<(), ChannelError> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), text.to_string()));
        Ok(())
    }
}

struct World {
    booking_service: BookingService,
    notification_service: NotificationService,
    notifications: Arc<InMemoryNotificationStore>,
    properties: Arc<InMemoryPropertyDirectory>,
    email: Arc<RecordingEmailSender>,
    sms: Arc<RecordingSmsSender>,
    property_id: Uuid,
    client: Actor,
    owner: Actor,
}

/// Wire the full stack with in-memory collaborators and recording channels.
/// `detached` selects the fire-and-forget notifier used in production.
fn world(detached: bool) -> World {
    let config = EstateConfig::default();
    let bookings = Arc::new(InMemoryBookingRepository::default());
    let properties = Arc::new(InMemoryPropertyDirectory::default());
    let users = Arc::new(InMemoryUserDirectory::default());
    let notifications = Arc::new(InMemoryNotificationStore::default());
    let email = Arc::new(RecordingEmailSender::default());
    let sms = Arc::new(RecordingSmsSender::default());

    let owner = UserProfile {
        id: Uuid::new_v4(),
        name: "Omar".into(),
        email: Some("omar@example.com".into()),
        phone: Some("+919812345678".into()),
        preferences: NotificationPreferences::default(),
    };
    // The client keeps email on but opts out of SMS entirely
    let client = UserProfile {
        id: Uuid::new_v4(),
        name: "Chandra".into(),
        email: Some("chandra@example.com".into()),
        phone: Some("+919898989898".into()),
        preferences: NotificationPreferences {
            email: ChannelOptIn::default(),
            sms: ChannelOptIn::all_disabled(),
        },
    };
    users.insert(owner.clone());
    users.insert(client.clone());

    let property = PropertySummary {
        id: Uuid::new_v4(),
        owner_id: owner.id,
        title: "Sunny 2BHK".into(),
        address: "12 Hill Road, Bandra".into(),
    };
    properties.insert(property.clone());

    let orchestrator = Arc::new(NotificationOrchestrator::new(
        bookings.clone(),
        properties.clone(),
        users,
        notifications.clone(),
        email.clone(),
        sms.clone(),
        &config,
    ));

    let notifier: Arc<dyn estate_core::BookingNotifier> = if detached {
        Arc::new(DetachedNotifier::new(orchestrator))
    } else {
        Arc::new(InlineNotifier::new(orchestrator))
    };

    let booking_service = BookingService::new(
        bookings,
        properties.clone(),
        EventPublisher::default(),
        notifier,
    );
    let notification_service = NotificationService::new(notifications.clone(), config);

    World {
        booking_service,
        notification_service,
        notifications,
        properties,
        email,
        sms,
        property_id: property.id,
        client: Actor {
            user_id: client.id,
            role: UserRole::Client,
        },
        owner: Actor {
            user_id: owner.id,
            role: UserRole::Owner,
        },
    }
}

#[tokio::test]
async fn full_lifecycle_with_notifications() {
    let w = world(false);

    // Client C books property P for a future weekend visit
    let booking = w
        .booking_service
        .create_booking(
            w.client.user_id,
            NewBooking {
                property_id: w.property_id,
                scheduled_at: Utc::now() + Duration::days(10),
                notes: Some("weekend visit".into()),
            },
        )
        .await
        .unwrap();

    assert_eq!(booking.status, BookingState::Requested);
    assert_eq!(booking.owner_id, w.owner.user_id);
    assert_eq!(w.properties.inquiry_count(w.property_id), 1);

    // Only the owner hears about the request
    assert_eq!(
        w.notification_service
            .unread_count(w.owner.user_id)
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        w.notification_service
            .unread_count(w.client.user_id)
            .await
            .unwrap(),
        0
    );
    let owner_inbox = w
        .notification_service
        .list(w.owner.user_id, true, None)
        .await
        .unwrap();
    assert_eq!(owner_inbox[0].title, "New Booking Request");

    // The client cannot confirm their own request
    let confirm = BookingUpdate {
        status: Some(BookingState::Confirmed),
        ..Default::default()
    };
    let err = w
        .booking_service
        .update_booking(booking.id, &w.client, confirm.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, EstateError::Forbidden(_)));

    // The owner confirms; both parties are notified
    let confirmed = w
        .booking_service
        .update_booking(booking.id, &w.owner, confirm)
        .await
        .unwrap();
    assert_eq!(confirmed.status, BookingState::Confirmed);
    assert!(confirmed.confirmed_at.is_some());

    assert_eq!(
        w.notification_service
            .unread_count(w.client.user_id)
            .await
            .unwrap(),
        1
    );
    let client_inbox = w
        .notification_service
        .list(w.client.user_id, true, None)
        .await
        .unwrap();
    assert_eq!(client_inbox[0].title, "Booking Confirmed");

    // Client opted out of SMS: only the owner's phone ever gets texts
    {
        let texts = w.sms.sent.lock().unwrap();
        assert!(texts.iter().all(|(to, _)| to == "+919812345678"));
        assert_eq!(texts.len(), 2); // created + confirmed, owner only
    }
    // Email went to both on confirmation
    {
        let mails = w.email.sent.lock().unwrap();
        assert_eq!(
            mails
                .iter()
                .filter(|(_, subject)| subject == "Booking Confirmed")
                .count(),
            2
        );
    }

    // The client cannot complete the visit either
    let complete = BookingUpdate {
        status: Some(BookingState::Completed),
        ..Default::default()
    };
    let err = w
        .booking_service
        .update_booking(booking.id, &w.client, complete.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, EstateError::Forbidden(_)));

    // The owner completes it
    let completed = w
        .booking_service
        .update_booking(booking.id, &w.owner, complete)
        .await
        .unwrap();
    assert_eq!(completed.status, BookingState::Completed);
    assert!(completed.completed_at.is_some());

    // Terminal state: no further transitions
    let err = w
        .booking_service
        .update_booking(
            booking.id,
            &w.owner,
            BookingUpdate {
                status: Some(BookingState::Cancelled),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EstateError::InvalidStateTransition(_)));

    // Reading the inbox and marking it read
    let unread_before = w
        .notification_service
        .unread_count(w.owner.user_id)
        .await
        .unwrap();
    assert_eq!(unread_before, 3); // created + confirmed + completed
    w.notification_service
        .mark_all_read(w.owner.user_id)
        .await
        .unwrap();
    assert_eq!(
        w.notification_service
            .unread_count(w.owner.user_id)
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn detached_dispatch_lands_without_blocking_the_caller() {
    let w = world(true);

    let booking = w
        .booking_service
        .create_booking(
            w.client.user_id,
            NewBooking {
                property_id: w.property_id,
                scheduled_at: Utc::now() + Duration::days(2),
                notes: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(booking.status, BookingState::Requested);

    // The detached task owns delivery; poll until it lands
    let mut delivered = false;
    for _ in 0..100 {
        if w.notifications.unread_count(w.owner.user_id).await.unwrap() == 1 {
            delivered = true;
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    assert!(delivered, "detached dispatch never landed");
}

#[tokio::test]
async fn listing_is_scoped_per_party() {
    let w = world(false);

    let booking = w
        .booking_service
        .create_booking(
            w.client.user_id,
            NewBooking {
                property_id: w.property_id,
                scheduled_at: Utc::now() + Duration::days(4),
                notes: None,
            },
        )
        .await
        .unwrap();

    let client_view = w.booking_service.list_bookings(&w.client).await.unwrap();
    assert_eq!(client_view.len(), 1);
    assert_eq!(client_view[0].id, booking.id);

    let owner_view = w.booking_service.list_bookings(&w.owner).await.unwrap();
    assert_eq!(owner_view.len(), 1);

    let stranger = Actor {
        user_id: Uuid::new_v4(),
        role: UserRole::Client,
    };
    assert!(w
        .booking_service
        .list_bookings(&stranger)
        .await
        .unwrap()
        .is_empty());

    // A stranger cannot even read the booking
    let err = w
        .booking_service
        .get_booking(booking.id, &stranger)
        .await
        .unwrap_err();
    assert!(matches!(err, EstateError::Forbidden(_)));
}
