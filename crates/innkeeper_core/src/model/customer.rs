//! Customer domain model.

use serde::{Deserialize, Serialize};

use super::RecordId;

/// A customer that bookings reference by id.
///
/// No uniqueness constraint is enforced on `email_address` at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Storage-assigned id, immutable once created.
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

/// Create shape for a customer. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

/// Partial-update shape for a customer. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
}
