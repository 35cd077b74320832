use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BookingError, Catalog, Rate, RoomId};

/// One room occupied on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Reservation {
    pub room_id: RoomId,
    pub date: NaiveDate,
}

impl Reservation {
    pub fn new(room_id: RoomId, date: NaiveDate) -> Self {
        Self { room_id, date }
    }
}

/// Active reservations, keyed by room and then by date.
///
/// A room only has an entry while it holds at least one reservation, and the
/// ordered maps give `list_all` its room-then-date order for free.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    bookings: BTreeMap<RoomId, BTreeSet<NaiveDate>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a booking without recording it, returning the room's rate.
    ///
    /// Checks run in a fixed order: past date, unknown room, conflict. A past
    /// date is therefore reported even for a room that does not exist.
    pub fn check(
        &self,
        catalog: &Catalog,
        room_id: RoomId,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Rate, BookingError> {
        if date < today {
            return Err(BookingError::PastDate { date, today });
        }
        let room = catalog
            .get_room(room_id)
            .map_err(|_| BookingError::UnknownRoom(room_id))?;
        if self.is_booked(room_id, date) {
            return Err(BookingError::Conflict { room_id, date });
        }
        Ok(room.rate)
    }

    /// Reserve `room_id` on `date` and return the room's rate.
    /// Nothing is recorded unless every check passes.
    pub fn book(
        &mut self,
        catalog: &Catalog,
        room_id: RoomId,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Rate, BookingError> {
        let rate = self.check(catalog, room_id, date, today)?;
        self.bookings.entry(room_id).or_default().insert(date);
        Ok(rate)
    }

    pub fn cancel(&mut self, room_id: RoomId, date: NaiveDate) -> Result<(), BookingError> {
        let Some(dates) = self.bookings.get_mut(&room_id) else {
            return Err(BookingError::NotFound { room_id, date });
        };
        if !dates.remove(&date) {
            return Err(BookingError::NotFound { room_id, date });
        }
        if dates.is_empty() {
            self.bookings.remove(&room_id);
        }
        Ok(())
    }

    /// Every active reservation, ordered by room number then date.
    pub fn list_all(&self) -> Vec<Reservation> {
        self.bookings
            .iter()
            .flat_map(|(&room_id, dates)| {
                dates.iter().map(move |&date| Reservation::new(room_id, date))
            })
            .collect()
    }

    pub fn is_booked(&self, room_id: RoomId, date: NaiveDate) -> bool {
        self.bookings
            .get(&room_id)
            .is_some_and(|dates| dates.contains(&date))
    }

    /// Booked dates of a single room, ascending.
    pub fn dates_for(&self, room_id: RoomId) -> Vec<NaiveDate> {
        self.bookings
            .get(&room_id)
            .map(|dates| dates.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Number of active reservations.
    pub fn len(&self) -> usize {
        self.bookings.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Rooms that currently hold at least one reservation.
    pub fn booked_rooms(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.bookings.keys().copied()
    }
}
