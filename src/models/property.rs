//! Property summary consumed from the property directory collaborator.
//! The catalog itself (CRUD, media, search indexing) lives outside this core.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The slice of a property record the booking core needs: ownership for
/// authorization and title/address for notification copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySummary {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub address: String,
}
