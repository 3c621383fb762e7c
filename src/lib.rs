#![allow(clippy::doc_markdown)] // Allow technical terms like DashMap, SendGrid in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Estate Core
//!
//! Rust core for property visit bookings: the booking lifecycle state
//! machine and its coupled multi-channel notification orchestration.
//!
//! ## Overview
//!
//! Prospective tenants/buyers request in-person property visits from
//! owners/agents; the core tracks each visit through a small lifecycle
//! (`requested → confirmed → completed`, with `cancelled` reachable from
//! either non-terminal state) and keeps both parties informed across
//! independent delivery channels (in-app, email, SMS) that can each fail
//! on their own.
//!
//! ## Architecture
//!
//! The booking service owns the state machine: it validates transition
//! legality and per-transition authorization, persists each change as one
//! whole-record update, and only then fires notification dispatch as a
//! detached, best-effort side effect. The orchestrator resolves the
//! audience and each member's channel preferences and fans out with full
//! per-channel isolation.
//!
//! Identity, the property catalog, the document store, and the concrete
//! email/SMS transports are external collaborators, consumed through the
//! capability traits in [`store`] and [`notifications`].
//!
//! ## Module Organization
//!
//! - [`models`] - Booking, notification, and collaborator summary types
//! - [`state_machine`] - Lifecycle states, events, guards, and actions
//! - [`store`] - Collaborator traits plus in-memory implementations
//! - [`notifications`] - Channel senders and the dispatch orchestrator
//! - [`services`] - Booking and notification service entry points
//! - [`events`] - Broadcast publisher for lifecycle events
//! - [`config`] - Runtime configuration
//! - [`error`] - Structured error taxonomy
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use estate_core::config::EstateConfig;
//! use estate_core::events::EventPublisher;
//! use estate_core::notifications::{
//!     DetachedNotifier, DisabledEmailSender, DisabledSmsSender, NotificationOrchestrator,
//! };
//! use estate_core::services::BookingService;
//! use estate_core::store::memory::{
//!     InMemoryBookingRepository, InMemoryNotificationStore, InMemoryPropertyDirectory,
//!     InMemoryUserDirectory,
//! };
//!
//! let config = EstateConfig::default();
//! let bookings = Arc::new(InMemoryBookingRepository::default());
//! let properties = Arc::new(InMemoryPropertyDirectory::default());
//! let users = Arc::new(InMemoryUserDirectory::default());
//! let notifications = Arc::new(InMemoryNotificationStore::default());
//!
//! let orchestrator = Arc::new(NotificationOrchestrator::new(
//!     bookings.clone(),
//!     properties.clone(),
//!     users,
//!     notifications,
//!     Arc::new(DisabledEmailSender),
//!     Arc::new(DisabledSmsSender),
//!     &config,
//! ));
//!
//! let service = BookingService::new(
//!     bookings,
//!     properties,
//!     EventPublisher::new(config.event_channel_capacity),
//!     Arc::new(DetachedNotifier::new(orchestrator)),
//! );
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod logging;
pub mod models;
pub mod notifications;
pub mod services;
pub mod state_machine;
pub mod store;

pub use config::EstateConfig;
pub use error::{EstateError, Result};
pub use models::{Actor, Booking, BookingUpdate, NewBooking, Notification, UserRole};
pub use notifications::{BookingEventKind, BookingNotifier, NotificationOrchestrator};
pub use services::{BookingService, NotificationService};
pub use state_machine::{BookingEvent, BookingState};
