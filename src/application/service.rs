use chrono::NaiveDate;
use tracing::{debug, info};

use crate::domain::{Catalog, Ledger, Rate, Reservation, Room, RoomId};

use super::{AppError, Clock};

/// Application service providing high-level operations for one hotel.
/// This is the primary interface for any client (CLI, shell, importer, tests).
///
/// Mutations take `&mut self`, so validation and the write that follows it
/// always run under exclusive access. Hosts that share a service across
/// threads wrap the whole service in one `Mutex`.
#[derive(Debug, Clone)]
pub struct HotelService {
    name: String,
    catalog: Catalog,
    ledger: Ledger,
    clock: Clock,
}

impl HotelService {
    /// Create a service over an explicit catalog with an empty ledger.
    pub fn new(name: impl Into<String>, catalog: Catalog, clock: Clock) -> Self {
        Self {
            name: name.into(),
            catalog,
            ledger: Ledger::new(),
            clock,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn currency(&self) -> &str {
        self.catalog.currency()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // ========================
    // Room operations
    // ========================

    /// Add a room, replacing any room with the same number.
    pub fn add_room(&mut self, room: Room) {
        if self.catalog.has_room(room.id) {
            info!(room_id = room.id, category = %room.category, rate = room.rate, "room redefined");
        } else {
            info!(room_id = room.id, category = %room.category, rate = room.rate, "room added");
        }
        self.catalog.add_room(room);
    }

    pub fn get_room(&self, id: RoomId) -> Result<&Room, AppError> {
        Ok(self.catalog.get_room(id)?)
    }

    pub fn has_room(&self, id: RoomId) -> bool {
        self.catalog.has_room(id)
    }

    pub fn describe(&self, id: RoomId) -> Result<String, AppError> {
        Ok(self.catalog.describe(id)?)
    }

    /// All rooms in ascending room number order.
    pub fn rooms(&self) -> Vec<&Room> {
        self.catalog.rooms().collect()
    }

    // ========================
    // Booking operations
    // ========================

    /// Book a room for one date and return the price to charge.
    pub fn book(&mut self, room_id: RoomId, date: NaiveDate) -> Result<Rate, AppError> {
        let today = self.today();
        let rate = self
            .ledger
            .book(&self.catalog, room_id, date, today)
            .inspect_err(|err| debug!(room_id, %date, %today, error = %err, "booking rejected"))?;

        info!(room_id, %date, rate, "booking recorded");
        Ok(rate)
    }

    /// Validate a booking without recording it, returning the price it would cost.
    pub fn check(&self, room_id: RoomId, date: NaiveDate) -> Result<Rate, AppError> {
        Ok(self.ledger.check(&self.catalog, room_id, date, self.today())?)
    }

    pub fn cancel(&mut self, room_id: RoomId, date: NaiveDate) -> Result<(), AppError> {
        self.ledger
            .cancel(room_id, date)
            .inspect_err(|err| debug!(room_id, %date, error = %err, "cancellation rejected"))?;

        info!(room_id, %date, "booking cancelled");
        Ok(())
    }

    /// Every active booking, ordered by room number then date.
    pub fn list_all(&self) -> Vec<Reservation> {
        self.ledger.list_all()
    }

    /// Booked dates of one room. Fails if the room is not in the catalog.
    pub fn bookings_for(&self, room_id: RoomId) -> Result<Vec<NaiveDate>, AppError> {
        self.catalog.get_room(room_id)?;
        Ok(self.ledger.dates_for(room_id))
    }

    pub fn is_booked(&self, room_id: RoomId, date: NaiveDate) -> bool {
        self.ledger.is_booked(room_id, date)
    }
}
