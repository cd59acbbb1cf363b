use slotmap::SlotMap;

use crate::rooms::RoomKey;
use crate::rooms::room::Room;

/// Owns every room of a level.
///
/// Everything else (propagation lists, the manager, triggers) refers to
/// rooms through [`RoomKey`]s handed out here.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: SlotMap<RoomKey, Room>,
}

impl RoomRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rooms: SlotMap::with_key(),
        }
    }

    /// Adds a room. Ids are not required to be unique; a clash is logged.
    pub fn insert(&mut self, room: Room) -> RoomKey {
        if let Some(existing) = self.find_by_id(room.id) {
            log::warn!(
                "Room '{}' reuses id {} already held by '{}'",
                room.name,
                room.id,
                self.rooms[existing].name
            );
        }
        self.rooms.insert(room)
    }

    pub fn remove(&mut self, key: RoomKey) -> Option<Room> {
        self.rooms.remove(key)
    }

    #[must_use]
    pub fn get(&self, key: RoomKey) -> Option<&Room> {
        self.rooms.get(key)
    }

    pub fn get_mut(&mut self, key: RoomKey) -> Option<&mut Room> {
        self.rooms.get_mut(key)
    }

    #[must_use]
    pub fn contains(&self, key: RoomKey) -> bool {
        self.rooms.contains_key(key)
    }

    /// First room carrying `id`, in slot order.
    #[must_use]
    pub fn find_by_id(&self, id: i32) -> Option<RoomKey> {
        self.rooms
            .iter()
            .find_map(|(key, room)| (room.id == id).then_some(key))
    }

    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<RoomKey> {
        self.rooms
            .iter()
            .find_map(|(key, room)| (room.name == name).then_some(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = RoomKey> + '_ {
        self.rooms.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoomKey, &Room)> {
        self.rooms.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl std::ops::Index<RoomKey> for RoomRegistry {
    type Output = Room;

    fn index(&self, key: RoomKey) -> &Room {
        &self.rooms[key]
    }
}

impl std::ops::IndexMut<RoomKey> for RoomRegistry {
    fn index_mut(&mut self, key: RoomKey) -> &mut Room {
        &mut self.rooms[key]
    }
}
