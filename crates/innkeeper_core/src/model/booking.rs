//! Booking domain model.
//!
//! # Invariants
//! - `to_date` is strictly after `from_date` for every stored booking;
//!   enforced at creation time by the operations layer, not re-checked
//!   on generic updates.
//! - `price` is derived once at creation (`nights * room.price`) and
//!   stored; later room price changes do not affect existing bookings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RecordId;

/// A stay in one room by one customer, priced at creation time.
///
/// `room_id` and `customer_id` are weak references; the referenced
/// records may have been deleted since.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Storage-assigned id, immutable once created.
    pub id: RecordId,
    pub room_id: RecordId,
    pub customer_id: RecordId,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    /// Total price snapshot taken when the booking was created.
    pub price: i64,
}

impl Booking {
    /// Whole-day length of the stay.
    pub fn nights(&self) -> i64 {
        (self.to_date - self.from_date).num_days()
    }
}

/// Store-facing create shape for a booking.
///
/// `price` is already derived here; callers go through
/// `ops::bookings::create_booking` which computes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub room_id: RecordId,
    pub customer_id: RecordId,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub price: i64,
}

/// Partial-update shape for a booking. `None` fields are left unchanged.
///
/// No business rule currently exposes booking updates; this exists to
/// keep the store contract uniform across entity kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingPatch {
    pub room_id: Option<RecordId>,
    pub customer_id: Option<RecordId>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub price: Option<i64>,
}
