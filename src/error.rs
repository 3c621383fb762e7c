use std::fmt;

use crate::state_machine::errors::StateMachineError;
use crate::store::StoreError;

/// Structured error taxonomy surfaced to callers of the booking core.
///
/// Channel delivery failures are deliberately absent: they are caught and
/// logged at the channel boundary inside the notification orchestrator and
/// never propagate to the caller of a state-changing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum EstateError {
    NotFound(String),
    InvalidArgument(String),
    Forbidden(String),
    InvalidStateTransition(String),
    StoreError(String),
    EventError(String),
    ConfigurationError(String),
}

impl fmt::Display for EstateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstateError::NotFound(msg) => write!(f, "Not found: {msg}"),
            EstateError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            EstateError::Forbidden(msg) => write!(f, "Forbidden: {msg}"),
            EstateError::InvalidStateTransition(msg) => {
                write!(f, "Invalid state transition: {msg}")
            }
            EstateError::StoreError(msg) => write!(f, "Store error: {msg}"),
            EstateError::EventError(msg) => write!(f, "Event error: {msg}"),
            EstateError::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for EstateError {}

impl From<StoreError> for EstateError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => {
                EstateError::NotFound(format!("{entity} {id} not found"))
            }
            StoreError::Backend(msg) => EstateError::StoreError(msg),
        }
    }
}

impl From<StateMachineError> for EstateError {
    fn from(err: StateMachineError) -> Self {
        match err {
            StateMachineError::InvalidTransition { from, to } => {
                EstateError::InvalidStateTransition(format!("cannot transition from {from} to {to}"))
            }
            StateMachineError::Guard(guard) => EstateError::Forbidden(guard.to_string()),
            StateMachineError::Action(action) => EstateError::EventError(action.to_string()),
            StateMachineError::Persistence(msg) => EstateError::StoreError(msg),
            StateMachineError::Internal(msg) => EstateError::StoreError(msg),
        }
    }
}

pub type Result<T, E = EstateError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EstateError::InvalidStateTransition("cancelled has no outgoing edges".into());
        assert_eq!(
            err.to_string(),
            "Invalid state transition: cancelled has no outgoing edges"
        );
    }

    #[test]
    fn test_store_not_found_maps_to_not_found() {
        let err: EstateError = StoreError::NotFound {
            entity: "booking",
            id: "abc".into(),
        }
        .into();
        assert!(matches!(err, EstateError::NotFound(_)));
    }
}
