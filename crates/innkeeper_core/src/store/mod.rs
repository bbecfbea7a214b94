//! Persistence layer: the storage-agnostic data interface and its
//! SQLite-backed implementations.
//!
//! # Responsibility
//! - Define the uniform CRUD capability set consumed by operations.
//! - Keep SQL details inside the per-entity store modules.
//!
//! # Invariants
//! - Absent ids surface as `StoreError::NotFound`, never as sentinel
//!   records.
//! - Partial updates only touch fields the caller explicitly set.

pub mod booking_store;
pub mod customer_store;
pub mod interface;
pub mod room_store;
