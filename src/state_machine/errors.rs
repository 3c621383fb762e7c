use thiserror::Error;

/// Errors produced while evaluating or applying a booking state transition
#[derive(Debug, Error)]
pub enum StateMachineError {
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Guard check failed: {0}")]
    Guard(#[from] GuardError),

    #[error("Action failed: {0}")]
    Action(#[from] ActionError),

    #[error("Persistence failed: {0}")]
    Persistence(String),

    #[error("Internal state machine error: {0}")]
    Internal(String),
}

pub type StateMachineResult<T> = Result<T, StateMachineError>;

/// Errors raised by transition guards
#[derive(Debug, Error)]
pub enum GuardError {
    #[error("Operation not authorized: {reason}")]
    NotAuthorized { reason: String },

    #[error("Invalid state for guard evaluation: {state}")]
    InvalidState { state: String },
}

pub type GuardResult<T> = Result<T, GuardError>;

/// Errors raised by post-transition actions
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Failed to publish event: {event_name}")]
    EventPublishFailed { event_name: String },
}

pub type ActionResult<T> = Result<T, ActionError>;

/// Helper to build an authorization guard failure
pub fn not_authorized(reason: impl Into<String>) -> GuardError {
    GuardError::NotAuthorized {
        reason: reason.into(),
    }
}
