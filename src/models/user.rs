//! User profile summary consumed from the user directory collaborator.
//! Identity and authentication are external concerns; the booking core only
//! needs contact points and channel preferences.

use crate::models::notification::NotificationPreferences;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Role of an authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Client,
    Owner,
    Agent,
    Admin,
}

impl UserRole {
    /// Owners and agents sit on the supply side of a booking.
    pub fn is_supply_side(&self) -> bool {
        matches!(self, Self::Owner | Self::Agent)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client => write!(f, "client"),
            Self::Owner => write!(f, "owner"),
            Self::Agent => write!(f, "agent"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Self::Client),
            "owner" => Ok(Self::Owner),
            "agent" => Ok(Self::Agent),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

/// Contact points and preferences for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub preferences: NotificationPreferences,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_string_conversion() {
        assert_eq!(UserRole::Agent.to_string(), "agent");
        assert_eq!("owner".parse::<UserRole>().unwrap(), UserRole::Owner);
        assert!("landlord".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_supply_side_roles() {
        assert!(UserRole::Owner.is_supply_side());
        assert!(UserRole::Agent.is_supply_side());
        assert!(!UserRole::Client.is_supply_side());
        assert!(!UserRole::Admin.is_supply_side());
    }
}
