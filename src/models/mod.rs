//! Data layer for the booking core: bookings, notifications, and the
//! summaries of collaborator-owned records (properties, users) the core
//! consumes but does not manage.

pub mod booking;
pub mod notification;
pub mod property;
pub mod user;

pub use booking::{Actor, Booking, BookingUpdate, NewBooking};
pub use notification::{ChannelOptIn, Notification, NotificationKind, NotificationPreferences};
pub use property::PropertySummary;
pub use user::{UserProfile, UserRole};
