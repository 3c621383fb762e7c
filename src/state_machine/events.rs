use serde::{Deserialize, Serialize};

/// Events that can trigger booking state transitions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum BookingEvent {
    /// Owner/agent accepts the requested visit
    Confirm,
    /// Owner/agent records that the visit took place
    Complete,
    /// Either party calls the visit off, with an optional reason
    Cancel(Option<String>),
}

impl BookingEvent {
    /// Get a string representation of the event type for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Confirm => "confirm",
            Self::Complete => "complete",
            Self::Cancel(_) => "cancel",
        }
    }

    /// Extract the cancellation reason if this is a cancel event
    pub fn cancellation_reason(&self) -> Option<&str> {
        match self {
            Self::Cancel(reason) => reason.as_deref(),
            _ => None,
        }
    }

    /// Check if this event lands the booking in a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Cancel(_))
    }

    /// Create a cancellation event with the given reason
    pub fn cancel_with_reason(reason: impl Into<String>) -> Self {
        Self::Cancel(Some(reason.into()))
    }
}
