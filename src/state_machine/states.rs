use serde::{Deserialize, Serialize};
use std::fmt;

/// Booking lifecycle state definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingState {
    /// Initial state when a visit is requested
    Requested,
    /// Owner/agent accepted the visit
    Confirmed,
    /// Either party cancelled the visit
    Cancelled,
    /// The visit took place
    Completed,
}

impl BookingState {
    /// Check if this is a terminal state (no further transitions allowed)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }

    /// Check if the proposed visit time may still be renegotiated
    pub fn allows_reschedule(&self) -> bool {
        matches!(self, Self::Requested)
    }
}

impl fmt::Display for BookingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Requested => write!(f, "requested"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for BookingState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "requested" => Ok(Self::Requested),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("Invalid booking state: {s}")),
        }
    }
}

/// Default state for new bookings
impl Default for BookingState {
    fn default() -> Self {
        Self::Requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_check() {
        assert!(BookingState::Cancelled.is_terminal());
        assert!(BookingState::Completed.is_terminal());
        assert!(!BookingState::Requested.is_terminal());
        assert!(!BookingState::Confirmed.is_terminal());
    }

    #[test]
    fn test_reschedule_window() {
        assert!(BookingState::Requested.allows_reschedule());
        assert!(!BookingState::Confirmed.allows_reschedule());
        assert!(!BookingState::Cancelled.allows_reschedule());
        assert!(!BookingState::Completed.allows_reschedule());
    }

    #[test]
    fn test_state_string_conversion() {
        assert_eq!(BookingState::Requested.to_string(), "requested");
        assert_eq!(
            "confirmed".parse::<BookingState>().unwrap(),
            BookingState::Confirmed
        );
        assert!("archived".parse::<BookingState>().is_err());
    }

    #[test]
    fn test_state_serde() {
        let state = BookingState::Cancelled;
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"cancelled\"");

        let parsed: BookingState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }
}
