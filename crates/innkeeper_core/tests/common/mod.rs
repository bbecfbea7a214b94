//! Test doubles and fixtures for operations-layer tests.
//!
//! The stubs stand in for real storage so business rules are tested in
//! isolation. `StubBookingStore` deliberately leaves `update`/`delete`
//! on the trait defaults to exercise the unsupported-capability path.

use chrono::NaiveDate;
use innkeeper_core::{
    Booking, BookingPatch, DataInterface, NewBooking, NewRoom, RecordId, Room, RoomPatch,
    StoreError, StoreResult,
};
use std::cell::RefCell;

/// Id the booking stub assigns to created records.
pub const STUB_CREATED_ID: RecordId = 999;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date should be valid")
}

pub fn sample_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: 1,
            room_id: 1,
            customer_id: 1,
            from_date: date(2025, 12, 25),
            to_date: date(2025, 12, 28),
            price: 300,
        },
        Booking {
            id: 2,
            room_id: 2,
            customer_id: 2,
            from_date: date(2025, 12, 23),
            to_date: date(2025, 12, 25),
            price: 300,
        },
    ]
}

/// Read-only room double holding a single room.
pub struct StubRoomStore {
    room: Room,
}

impl StubRoomStore {
    pub fn with_price(price: i64) -> Self {
        Self {
            room: Room {
                id: 1,
                number: "101".to_string(),
                size: 20,
                price,
            },
        }
    }
}

impl DataInterface for StubRoomStore {
    type Record = Room;
    type CreateData = NewRoom;
    type UpdateData = RoomPatch;
    const ENTITY: &'static str = "room";

    fn read_by_id(&self, id: RecordId) -> StoreResult<Room> {
        if id == self.room.id {
            Ok(self.room.clone())
        } else {
            Err(StoreError::NotFound {
                entity: Self::ENTITY,
                id,
            })
        }
    }

    fn read_all(&self) -> StoreResult<Vec<Room>> {
        Ok(vec![self.room.clone()])
    }

    fn create(&self, _data: NewRoom) -> StoreResult<Room> {
        Err(StoreError::Unsupported {
            entity: Self::ENTITY,
            operation: "create",
        })
    }
}

/// Booking double seeded with `sample_bookings()`.
///
/// `create` assigns `STUB_CREATED_ID`; `update`/`delete` fall through
/// to the trait's unsupported defaults.
pub struct StubBookingStore {
    rows: RefCell<Vec<Booking>>,
}

impl StubBookingStore {
    pub fn new() -> Self {
        Self {
            rows: RefCell::new(sample_bookings()),
        }
    }
}

impl DataInterface for StubBookingStore {
    type Record = Booking;
    type CreateData = NewBooking;
    type UpdateData = BookingPatch;
    const ENTITY: &'static str = "booking";

    fn read_by_id(&self, id: RecordId) -> StoreResult<Booking> {
        self.rows
            .borrow()
            .iter()
            .find(|booking| booking.id == id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: Self::ENTITY,
                id,
            })
    }

    fn read_all(&self) -> StoreResult<Vec<Booking>> {
        Ok(self.rows.borrow().clone())
    }

    fn create(&self, data: NewBooking) -> StoreResult<Booking> {
        let booking = Booking {
            id: STUB_CREATED_ID,
            room_id: data.room_id,
            customer_id: data.customer_id,
            from_date: data.from_date,
            to_date: data.to_date,
            price: data.price,
        };
        self.rows.borrow_mut().push(booking.clone());
        Ok(booking)
    }
}
