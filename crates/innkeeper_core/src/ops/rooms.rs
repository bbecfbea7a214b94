//! Room operations.
//!
//! Pure passthroughs: size/price validity is a caller-supplied-data
//! concern and is not enforced at this layer.

use crate::model::room::{NewRoom, Room};
use crate::model::RecordId;
use crate::ops::OpsResult;
use crate::store::interface::DataInterface;

/// Creates a room and returns it with its assigned id.
pub fn create_room<R>(data: NewRoom, room_store: &R) -> OpsResult<Room>
where
    R: DataInterface<Record = Room, CreateData = NewRoom>,
{
    Ok(room_store.create(data)?)
}

/// Returns every room.
pub fn read_all_rooms<R>(room_store: &R) -> OpsResult<Vec<Room>>
where
    R: DataInterface<Record = Room>,
{
    Ok(room_store.read_all()?)
}

/// Returns one room by id.
pub fn read_room_by_id<R>(id: RecordId, room_store: &R) -> OpsResult<Room>
where
    R: DataInterface<Record = Room>,
{
    Ok(room_store.read_by_id(id)?)
}
