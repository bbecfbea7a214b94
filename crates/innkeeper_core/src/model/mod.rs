//! Entity model for rooms, customers and bookings.
//!
//! # Responsibility
//! - Define the plain records persisted by the store layer.
//! - Define the create/patch input shapes consumed by operations.
//!
//! # Invariants
//! - Every record carries a storage-assigned `RecordId`, unique within
//!   its entity kind and never reused.
//! - Records own no other records; `room_id`/`customer_id` on a booking
//!   are weak references with no cascade semantics.

pub mod booking;
pub mod customer;
pub mod room;

/// Storage-assigned integer identifier shared by every entity kind.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = i64;
