//! # Notification Model
//!
//! One in-app notification record plus the per-user channel preference
//! structure the orchestrator consults before fanning out to email/SMS.
//! A notification is owned exclusively by its `user_id`; after creation it
//! only ever mutates through the read flag (`false → true`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Categories of notifications the system produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Booking,
    Message,
    Property,
    Verification,
    System,
}

impl NotificationKind {
    /// Preference category key gating email/SMS delivery for this kind.
    pub fn preference_key(&self) -> &'static str {
        match self {
            Self::Booking => "bookings",
            Self::Message => "messages",
            Self::Property | Self::Verification => "property_updates",
            Self::System => "bookings",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Booking => write!(f, "booking"),
            Self::Message => write!(f, "message"),
            Self::Property => write!(f, "property"),
            Self::Verification => write!(f, "verification"),
            Self::System => write!(f, "system"),
        }
    }
}

/// A record of one attempt to inform a user in-app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Structured payload carrying correlating ids (e.g. `booking_id`).
    pub data: Value,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        user_id: Uuid,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        data: Value,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            kind,
            title: title.into(),
            message: message.into(),
            data,
            read: false,
            created_at: Utc::now(),
        }
    }
}

/// Per-category opt-in flags for one delivery channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelOptIn {
    pub bookings: bool,
    pub messages: bool,
    pub property_updates: bool,
}

impl Default for ChannelOptIn {
    fn default() -> Self {
        Self {
            bookings: true,
            messages: true,
            property_updates: true,
        }
    }
}

impl ChannelOptIn {
    /// Resolve a preference by category key.
    pub fn is_enabled(&self, preference_key: &str) -> bool {
        match preference_key {
            "bookings" => self.bookings,
            "messages" => self.messages,
            "property_updates" => self.property_updates,
            _ => false,
        }
    }

    pub fn all_disabled() -> Self {
        Self {
            bookings: false,
            messages: false,
            property_updates: false,
        }
    }
}

/// Per-user opt-in/opt-out flags per channel. The in-app channel has no
/// entry here because it cannot be disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPreferences {
    pub email: ChannelOptIn,
    pub sms: ChannelOptIn,
}
