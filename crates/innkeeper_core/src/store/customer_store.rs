//! SQLite-backed customer store.

use crate::model::customer::{Customer, CustomerPatch, NewCustomer};
use crate::model::RecordId;
use crate::store::interface::{DataInterface, StoreError, StoreResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const CUSTOMER_SELECT_SQL: &str =
    "SELECT id, first_name, last_name, email_address FROM customers";

/// Customer CRUD over a migrated SQLite connection.
pub struct SqliteCustomerStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCustomerStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DataInterface for SqliteCustomerStore<'_> {
    type Record = Customer;
    type CreateData = NewCustomer;
    type UpdateData = CustomerPatch;
    const ENTITY: &'static str = "customer";

    fn read_by_id(&self, id: RecordId) -> StoreResult<Customer> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CUSTOMER_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => parse_customer_row(row),
            None => Err(StoreError::NotFound {
                entity: Self::ENTITY,
                id,
            }),
        }
    }

    fn read_all(&self) -> StoreResult<Vec<Customer>> {
        let mut stmt = self.conn.prepare(&format!("{CUSTOMER_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut customers = Vec::new();
        while let Some(row) = rows.next()? {
            customers.push(parse_customer_row(row)?);
        }
        Ok(customers)
    }

    fn create(&self, data: NewCustomer) -> StoreResult<Customer> {
        self.conn.execute(
            "INSERT INTO customers (first_name, last_name, email_address)
             VALUES (?1, ?2, ?3);",
            params![
                data.first_name.as_str(),
                data.last_name.as_str(),
                data.email_address.as_str(),
            ],
        )?;
        self.read_by_id(self.conn.last_insert_rowid())
    }

    fn update(&self, id: RecordId, data: CustomerPatch) -> StoreResult<Customer> {
        let mut assignments: Vec<&'static str> = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(first_name) = data.first_name {
            assignments.push("first_name = ?");
            bind_values.push(Value::Text(first_name));
        }
        if let Some(last_name) = data.last_name {
            assignments.push("last_name = ?");
            bind_values.push(Value::Text(last_name));
        }
        if let Some(email_address) = data.email_address {
            assignments.push("email_address = ?");
            bind_values.push(Value::Text(email_address));
        }

        // An all-None patch changes nothing; degrade to a read.
        if assignments.is_empty() {
            return self.read_by_id(id);
        }

        let sql = format!(
            "UPDATE customers SET {} WHERE id = ?;",
            assignments.join(", ")
        );
        bind_values.push(Value::Integer(id));

        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        if changed == 0 {
            return Err(StoreError::NotFound {
                entity: Self::ENTITY,
                id,
            });
        }
        self.read_by_id(id)
    }

    fn delete(&self, id: RecordId) -> StoreResult<Customer> {
        let customer = self.read_by_id(id)?;
        self.conn
            .execute("DELETE FROM customers WHERE id = ?1;", params![id])?;
        Ok(customer)
    }
}

fn parse_customer_row(row: &Row<'_>) -> StoreResult<Customer> {
    Ok(Customer {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        email_address: row.get("email_address")?,
    })
}
