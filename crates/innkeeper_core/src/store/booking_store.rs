//! SQLite-backed booking store.
//!
//! Dates persist as ISO-8601 `TEXT` columns; corrupt date text in a
//! persisted row is rejected with `InvalidData` instead of being masked.

use crate::model::booking::{Booking, BookingPatch, NewBooking};
use crate::model::RecordId;
use crate::store::interface::{DataInterface, StoreError, StoreResult};
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const BOOKING_SELECT_SQL: &str =
    "SELECT id, room_id, customer_id, from_date, to_date, price FROM bookings";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Booking CRUD over a migrated SQLite connection.
pub struct SqliteBookingStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookingStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DataInterface for SqliteBookingStore<'_> {
    type Record = Booking;
    type CreateData = NewBooking;
    type UpdateData = BookingPatch;
    const ENTITY: &'static str = "booking";

    fn read_by_id(&self, id: RecordId) -> StoreResult<Booking> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOKING_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => parse_booking_row(row),
            None => Err(StoreError::NotFound {
                entity: Self::ENTITY,
                id,
            }),
        }
    }

    fn read_all(&self) -> StoreResult<Vec<Booking>> {
        let mut stmt = self.conn.prepare(&format!("{BOOKING_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut bookings = Vec::new();
        while let Some(row) = rows.next()? {
            bookings.push(parse_booking_row(row)?);
        }
        Ok(bookings)
    }

    fn create(&self, data: NewBooking) -> StoreResult<Booking> {
        self.conn.execute(
            "INSERT INTO bookings (room_id, customer_id, from_date, to_date, price)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                data.room_id,
                data.customer_id,
                date_to_db(data.from_date),
                date_to_db(data.to_date),
                data.price,
            ],
        )?;
        self.read_by_id(self.conn.last_insert_rowid())
    }

    fn update(&self, id: RecordId, data: BookingPatch) -> StoreResult<Booking> {
        let mut assignments: Vec<&'static str> = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(room_id) = data.room_id {
            assignments.push("room_id = ?");
            bind_values.push(Value::Integer(room_id));
        }
        if let Some(customer_id) = data.customer_id {
            assignments.push("customer_id = ?");
            bind_values.push(Value::Integer(customer_id));
        }
        if let Some(from_date) = data.from_date {
            assignments.push("from_date = ?");
            bind_values.push(Value::Text(date_to_db(from_date)));
        }
        if let Some(to_date) = data.to_date {
            assignments.push("to_date = ?");
            bind_values.push(Value::Text(date_to_db(to_date)));
        }
        if let Some(price) = data.price {
            assignments.push("price = ?");
            bind_values.push(Value::Integer(price));
        }

        // An all-None patch changes nothing; degrade to a read.
        if assignments.is_empty() {
            return self.read_by_id(id);
        }

        let sql = format!(
            "UPDATE bookings SET {} WHERE id = ?;",
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

    fn delete(&self, id: RecordId) -> StoreResult<Booking> {
        let booking = self.read_by_id(id)?;
        self.conn
            .execute("DELETE FROM bookings WHERE id = ?1;", params![id])?;
        Ok(booking)
    }
}

fn parse_booking_row(row: &Row<'_>) -> StoreResult<Booking> {
    Ok(Booking {
        id: row.get("id")?,
        room_id: row.get("room_id")?,
        customer_id: row.get("customer_id")?,
        from_date: parse_date_column(row, "from_date")?,
        to_date: parse_date_column(row, "to_date")?,
        price: row.get("price")?,
    })
}

fn parse_date_column(row: &Row<'_>, column: &'static str) -> StoreResult<NaiveDate> {
    let text: String = row.get(column)?;
    NaiveDate::parse_from_str(&text, DATE_FORMAT).map_err(|_| {
        StoreError::InvalidData(format!("invalid date value `{text}` in bookings.{column}"))
    })
}

fn date_to_db(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
