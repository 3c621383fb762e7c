//! Service layer: the booking lifecycle entry points and the
//! user-facing notification surface.

pub mod booking_service;
pub mod notification_service;

pub use booking_service::BookingService;
pub use notification_service::NotificationService;
