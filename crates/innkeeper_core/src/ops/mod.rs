//! Business-rule operations per entity kind.
//!
//! # Responsibility
//! - Apply the business rules (booking pricing and date validation,
//!   partial updates) on top of injected data interfaces.
//! - Stay storage-agnostic: every function takes its store(s) as
//!   trait-bound parameters, never through global lookup.
//!
//! # Invariants
//! - Store errors propagate untranslated; operations never substitute
//!   default data for a failed read.
//! - No operation retries; every call is attempted exactly once.

use crate::store::interface::StoreError;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod bookings;
pub mod customers;
pub mod rooms;

pub type OpsResult<T> = Result<T, OpsError>;

/// Operation-level error for business-rule failures and propagated
/// store errors.
#[derive(Debug)]
pub enum OpsError {
    /// Booking dates rejected: `to_date` must be strictly after
    /// `from_date`.
    InvalidDates {
        from_date: NaiveDate,
        to_date: NaiveDate,
    },
    Store(StoreError),
}

impl Display for OpsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDates { from_date, to_date } => write!(
                f,
                "invalid booking dates: to_date {to_date} must be strictly after from_date {from_date}"
            ),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for OpsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDates { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for OpsError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
