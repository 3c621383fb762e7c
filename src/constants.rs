//! # System Constants
//!
//! Lifecycle event names and operational defaults shared across the booking
//! core. Event names follow the `<entity>.<event>` convention used by the
//! broadcast publisher.

/// Booking lifecycle events published on every successful state change.
pub mod events {
    pub const BOOKING_REQUESTED: &str = "booking.requested";
    pub const BOOKING_CONFIRMED: &str = "booking.confirmed";
    pub const BOOKING_CANCELLED: &str = "booking.cancelled";
    pub const BOOKING_COMPLETED: &str = "booking.completed";
    pub const BOOKING_RESCHEDULED: &str = "booking.rescheduled";
}

/// Notification surface defaults.
pub mod notifications {
    /// Preference category key that gates booking email/SMS delivery.
    pub const PREFERENCE_KEY_BOOKINGS: &str = "bookings";
    /// Hard ceiling on a single notification listing, regardless of the
    /// caller-supplied limit.
    pub const MAX_LIST_LIMIT: usize = 200;
}
