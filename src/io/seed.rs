use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, warn};

use crate::application::{AppError, Clock, HotelService, parse_date};
use crate::domain::{Catalog, DEFAULT_CURRENCY, Rate, Room, RoomCategory, RoomId};

/// Initial state of a hotel: its rooms and any bookings to replay on startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    pub name: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub rooms: Vec<RoomSeed>,
    #[serde(default)]
    pub bookings: Vec<BookingSeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSeed {
    pub id: RoomId,
    pub category: RoomCategory,
    pub rate: Rate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSeed {
    pub room_id: RoomId,
    /// YYYY-MM-DD
    pub date: String,
}

/// Outcome of replaying seed bookings.
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    pub booked: usize,
    pub skipped: Vec<SkippedBooking>,
}

#[derive(Debug, Clone)]
pub struct SkippedBooking {
    pub room_id: RoomId,
    pub date: String,
    pub error: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            name: "Best Hotel".to_string(),
            currency: default_currency(),
            rooms: vec![
                RoomSeed {
                    id: 101,
                    category: RoomCategory::Single,
                    rate: 15000,
                },
                RoomSeed {
                    id: 102,
                    category: RoomCategory::Double,
                    rate: 20000,
                },
                RoomSeed {
                    id: 103,
                    category: RoomCategory::Single,
                    rate: 18000,
                },
            ],
            bookings: Vec::new(),
        }
    }
}

impl SeedConfig {
    /// Load a seed from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let file = File::open(path.as_ref())?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a service from this seed.
    ///
    /// Rooms must all be valid. Seed bookings go through the normal booking
    /// rules; the ones that fail are logged and reported instead of aborting.
    pub fn build(&self, clock: Clock) -> Result<(HotelService, SeedReport), AppError> {
        let mut rooms = Vec::with_capacity(self.rooms.len());
        for room in &self.rooms {
            if room.rate <= 0 {
                return Err(AppError::InvalidRate {
                    input: room.rate.to_string(),
                    reason: format!("room {} must have a positive rate", room.id),
                });
            }
            rooms.push(Room::new(room.id, room.category, room.rate));
        }

        let catalog = Catalog::with_rooms(rooms).with_currency(self.currency.clone());
        let mut service = HotelService::new(self.name.clone(), catalog, clock);
        let mut report = SeedReport::default();

        for booking in &self.bookings {
            let outcome = parse_date(&booking.date)
                .and_then(|date| service.book(booking.room_id, date));
            match outcome {
                Ok(_) => report.booked += 1,
                Err(err) => {
                    warn!(
                        room_id = booking.room_id,
                        date = %booking.date,
                        error = %err,
                        "seed booking skipped"
                    );
                    report.skipped.push(SkippedBooking {
                        room_id: booking.room_id,
                        date: booking.date.clone(),
                        error: err.to_string(),
                    });
                }
            }
        }

        info!(
            hotel = %service.name(),
            rooms = self.rooms.len(),
            booked = report.booked,
            skipped = report.skipped.len(),
            "hotel seeded"
        );
        Ok((service, report))
    }
}
