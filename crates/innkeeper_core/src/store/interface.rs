//! Generic data interface contract and store errors.
//!
//! # Responsibility
//! - Define the capability set every storage adapter or test double
//!   satisfies, so operations code is storage-agnostic.
//!
//! # Invariants
//! - `create` assigns a fresh id; the caller never supplies one.
//! - `update` applies only fields present in the patch; absent fields
//!   are left unchanged on the stored record.
//! - Unsupported capabilities fail with an explicit error instead of
//!   succeeding silently.

use crate::db::DbError;
use crate::model::RecordId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Generic store error shared by every entity kind.
#[derive(Debug)]
pub enum StoreError {
    /// No record with this id exists (or it was already deleted).
    NotFound { entity: &'static str, id: RecordId },
    /// The store implementation does not support this capability.
    Unsupported {
        entity: &'static str,
        operation: &'static str,
    },
    Db(DbError),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::Unsupported { entity, operation } => {
                write!(f, "{operation} not supported by this {entity} store")
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound { .. } | Self::Unsupported { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Uniform CRUD capability set over one entity kind.
///
/// Operations code depends only on this trait, never on a concrete
/// storage technology. `update` and `delete` carry default bodies that
/// fail with `StoreError::Unsupported`, so partial test doubles keep
/// the uniform interface without silently succeeding.
pub trait DataInterface {
    /// Stored record shape, id included.
    type Record;
    /// Create input, id excluded.
    type CreateData;
    /// Partial-update input; `None` fields stay unchanged.
    type UpdateData;
    /// Entity kind label used in error messages.
    const ENTITY: &'static str;

    /// Returns the record with this id, or `NotFound`.
    fn read_by_id(&self, id: RecordId) -> StoreResult<Self::Record>;

    /// Returns every record. Order carries no meaning for callers.
    fn read_all(&self) -> StoreResult<Vec<Self::Record>>;

    /// Persists a new record atomically and returns it with its
    /// assigned id.
    fn create(&self, data: Self::CreateData) -> StoreResult<Self::Record>;

    /// Applies the set fields of `data` to the stored record and
    /// returns the result, or `NotFound`.
    fn update(&self, id: RecordId, data: Self::UpdateData) -> StoreResult<Self::Record> {
        let _ = (id, data);
        Err(StoreError::Unsupported {
            entity: Self::ENTITY,
            operation: "update",
        })
    }

    /// Removes the record and returns its value as it existed just
    /// before deletion, or `NotFound`.
    fn delete(&self, id: RecordId) -> StoreResult<Self::Record> {
        let _ = id;
        Err(StoreError::Unsupported {
            entity: Self::ENTITY,
            operation: "delete",
        })
    }
}
