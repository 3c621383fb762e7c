// State machine module for the booking visit lifecycle.
//
// Bookings move through a small, fixed transition graph gated by actor
// authorization guards, with post-transition actions publishing lifecycle
// events. This is the only place booking status is allowed to change.

pub mod actions;
pub mod booking_state_machine;
pub mod errors;
pub mod events;
pub mod guards;
pub mod states;

// Re-export main types for convenient access
pub use booking_state_machine::{next_state, BookingStateMachine};
pub use errors::{ActionError, GuardError, StateMachineError, StateMachineResult};
pub use events::BookingEvent;
pub use states::BookingState;

// Common traits
pub use actions::StateAction;
pub use guards::StateGuard;
