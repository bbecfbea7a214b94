//! Core domain logic for Innkeeper, a small property-management backend.
//! This crate is the single source of truth for business invariants.
//!
//! Boundary adapters (HTTP routing, process lifespan, seeding scripts)
//! live outside this crate and consume it through the `ops` functions
//! and the `store::interface::DataInterface` contract.

pub mod db;
pub mod logging;
pub mod model;
pub mod ops;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::booking::{Booking, BookingPatch, NewBooking};
pub use model::customer::{Customer, CustomerPatch, NewCustomer};
pub use model::room::{NewRoom, Room, RoomPatch};
pub use model::RecordId;
pub use ops::bookings::BookingCreateData;
pub use ops::{OpsError, OpsResult};
pub use store::booking_store::SqliteBookingStore;
pub use store::customer_store::SqliteCustomerStore;
pub use store::interface::{DataInterface, StoreError, StoreResult};
pub use store::room_store::SqliteRoomStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
