//! Booking operations: the one non-trivial rule in the system.
//!
//! # Invariants
//! - `price = nights * room.price`, evaluated against the room's rate
//!   at booking-creation time. Later rate changes never touch existing
//!   bookings.
//! - Invalid date ranges are rejected before any write happens.
//!
//! Known product-level gap: nothing prevents two bookings for the same
//! room on overlapping dates. Kept as-is pending a product decision.

use crate::model::booking::{Booking, NewBooking};
use crate::model::room::Room;
use crate::model::RecordId;
use crate::ops::{OpsError, OpsResult};
use crate::store::interface::DataInterface;
use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};

/// Caller-facing create input. `price` is derived, never supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCreateData {
    pub room_id: RecordId,
    pub customer_id: RecordId,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

/// Creates a booking priced from the referenced room's current rate.
///
/// The room read happens first, so a nonexistent `room_id` fails loudly
/// with the store's `NotFound` instead of pricing against default data.
/// `customer_id` is deliberately not validated at this layer.
///
/// # Errors
/// - `OpsError::InvalidDates` when `to_date <= from_date`; nothing is
///   written in that case.
pub fn create_booking<B, R>(
    data: BookingCreateData,
    booking_store: &B,
    room_store: &R,
) -> OpsResult<Booking>
where
    B: DataInterface<Record = Booking, CreateData = NewBooking>,
    R: DataInterface<Record = Room>,
{
    let room = room_store.read_by_id(data.room_id)?;

    let nights = (data.to_date - data.from_date).num_days();
    if nights <= 0 {
        return Err(OpsError::InvalidDates {
            from_date: data.from_date,
            to_date: data.to_date,
        });
    }

    let price = nights * room.price;
    info!(
        "event=booking_priced module=ops room_id={} nights={nights} price={price}",
        data.room_id
    );

    let created = booking_store.create(NewBooking {
        room_id: data.room_id,
        customer_id: data.customer_id,
        from_date: data.from_date,
        to_date: data.to_date,
        price,
    })?;
    Ok(created)
}

/// Returns every booking.
pub fn read_all_bookings<B>(booking_store: &B) -> OpsResult<Vec<Booking>>
where
    B: DataInterface<Record = Booking>,
{
    Ok(booking_store.read_all()?)
}

/// Returns one booking by id.
pub fn read_booking_by_id<B>(id: RecordId, booking_store: &B) -> OpsResult<Booking>
where
    B: DataInterface<Record = Booking>,
{
    Ok(booking_store.read_by_id(id)?)
}

/// Deletes one booking and returns its last stored value.
pub fn delete_booking<B>(id: RecordId, booking_store: &B) -> OpsResult<Booking>
where
    B: DataInterface<Record = Booking>,
{
    Ok(booking_store.delete(id)?)
}
