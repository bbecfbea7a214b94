//! SQLite-backed room store.

use crate::model::room::{NewRoom, Room, RoomPatch};
use crate::model::RecordId;
use crate::store::interface::{DataInterface, StoreError, StoreResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const ROOM_SELECT_SQL: &str = "SELECT id, number, size, price FROM rooms";

/// Room CRUD over a migrated SQLite connection.
pub struct SqliteRoomStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRoomStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DataInterface for SqliteRoomStore<'_> {
    type Record = Room;
    type CreateData = NewRoom;
    type UpdateData = RoomPatch;
    const ENTITY: &'static str = "room";

    fn read_by_id(&self, id: RecordId) -> StoreResult<Room> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ROOM_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => parse_room_row(row),
            None => Err(StoreError::NotFound {
                entity: Self::ENTITY,
                id,
            }),
        }
    }

    fn read_all(&self) -> StoreResult<Vec<Room>> {
        let mut stmt = self.conn.prepare(&format!("{ROOM_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut rooms = Vec::new();
        while let Some(row) = rows.next()? {
            rooms.push(parse_room_row(row)?);
        }
        Ok(rooms)
    }

    fn create(&self, data: NewRoom) -> StoreResult<Room> {
        self.conn.execute(
            "INSERT INTO rooms (number, size, price) VALUES (?1, ?2, ?3);",
            params![data.number.as_str(), data.size, data.price],
        )?;
        self.read_by_id(self.conn.last_insert_rowid())
    }

    fn update(&self, id: RecordId, data: RoomPatch) -> StoreResult<Room> {
        let mut assignments: Vec<&'static str> = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(number) = data.number {
            assignments.push("number = ?");
            bind_values.push(Value::Text(number));
        }
        if let Some(size) = data.size {
            assignments.push("size = ?");
            bind_values.push(Value::Integer(size));
        }
        if let Some(price) = data.price {
            assignments.push("price = ?");
            bind_values.push(Value::Integer(price));
        }

        // An all-None patch changes nothing; degrade to a read.
        if assignments.is_empty() {
            return self.read_by_id(id);
        }

        let sql = format!("UPDATE rooms SET {} WHERE id = ?;", assignments.join(", "));
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

    fn delete(&self, id: RecordId) -> StoreResult<Room> {
        let room = self.read_by_id(id)?;
        self.conn
            .execute("DELETE FROM rooms WHERE id = ?1;", params![id])?;
        Ok(room)
    }
}

fn parse_room_row(row: &Row<'_>) -> StoreResult<Room> {
    Ok(Room {
        id: row.get("id")?,
        number: row.get("number")?,
        size: row.get("size")?,
        price: row.get("price")?,
    })
}
