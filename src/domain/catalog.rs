use std::collections::BTreeMap;

use super::{CatalogError, DEFAULT_CURRENCY, Room, RoomId};

/// The set of rooms a hotel offers, keyed by room number.
#[derive(Debug, Clone)]
pub struct Catalog {
    rooms: BTreeMap<RoomId, Room>,
    currency: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            rooms: BTreeMap::new(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Build a catalog from an explicit list of rooms. Later entries win on
    /// duplicate ids, same as repeated `add_room` calls.
    pub fn with_rooms(rooms: impl IntoIterator<Item = Room>) -> Self {
        let mut catalog = Self::new();
        for room in rooms {
            catalog.add_room(room);
        }
        catalog
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Insert a room, replacing any previous definition with the same id.
    pub fn add_room(&mut self, room: Room) {
        self.rooms.insert(room.id, room);
    }

    pub fn get_room(&self, id: RoomId) -> Result<&Room, CatalogError> {
        self.rooms.get(&id).ok_or(CatalogError::RoomNotFound(id))
    }

    pub fn has_room(&self, id: RoomId) -> bool {
        self.rooms.contains_key(&id)
    }

    pub fn describe(&self, id: RoomId) -> Result<String, CatalogError> {
        Ok(self.get_room(id)?.describe(&self.currency))
    }

    /// All rooms in ascending room number order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
