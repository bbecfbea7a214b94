//! Room domain model.

use serde::{Deserialize, Serialize};

use super::RecordId;

/// A bookable room with a per-night rate.
///
/// Read-only after creation as far as business rules go; the store layer
/// still supports generic updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Storage-assigned id, immutable once created.
    pub id: RecordId,
    /// Display label. Not required to be unique.
    pub number: String,
    /// Floor area; callers are expected to supply a positive value.
    pub size: i64,
    /// Per-night rate used to price bookings at creation time.
    pub price: i64,
}

/// Create shape for a room. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoom {
    pub number: String,
    pub size: i64,
    pub price: i64,
}

/// Partial-update shape for a room. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomPatch {
    pub number: Option<String>,
    pub size: Option<i64>,
    pub price: Option<i64>,
}
