//! Customer operations.
//!
//! No validation happens here beyond the input shapes themselves; the
//! partial-update merge is delegated entirely to the store contract.

use crate::model::customer::{Customer, CustomerPatch, NewCustomer};
use crate::model::RecordId;
use crate::ops::OpsResult;
use crate::store::interface::DataInterface;

/// Creates a customer and returns it with its assigned id.
pub fn create_customer<C>(data: NewCustomer, customer_store: &C) -> OpsResult<Customer>
where
    C: DataInterface<Record = Customer, CreateData = NewCustomer>,
{
    Ok(customer_store.create(data)?)
}

/// Applies the set fields of `data` to one customer.
///
/// Fields left as `None` are unchanged on the stored record.
pub fn update_customer<C>(
    id: RecordId,
    data: CustomerPatch,
    customer_store: &C,
) -> OpsResult<Customer>
where
    C: DataInterface<Record = Customer, UpdateData = CustomerPatch>,
{
    Ok(customer_store.update(id, data)?)
}

/// Returns every customer.
pub fn read_all_customers<C>(customer_store: &C) -> OpsResult<Vec<Customer>>
where
    C: DataInterface<Record = Customer>,
{
    Ok(customer_store.read_all()?)
}

/// Returns one customer by id.
pub fn read_customer_by_id<C>(id: RecordId, customer_store: &C) -> OpsResult<Customer>
where
    C: DataInterface<Record = Customer>,
{
    Ok(customer_store.read_by_id(id)?)
}
