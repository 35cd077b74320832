use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::{AppError, HotelService};
use crate::domain::{Reservation, Room};

/// Full in-memory state of a hotel, for JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub name: String,
    pub currency: String,
    pub rooms: Vec<Room>,
    pub reservations: Vec<Reservation>,
}

/// Exporter for converting hotel data to various formats
pub struct Exporter<'a> {
    service: &'a HotelService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a HotelService) -> Self {
        Self { service }
    }

    /// Export bookings to CSV format, ordered by room then date
    pub fn export_bookings_csv<W: Write>(&self, writer: W) -> Result<usize, AppError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["room_id", "date"])?;

        let mut count = 0;
        for reservation in self.service.list_all() {
            csv_writer.write_record([
                reservation.room_id.to_string(),
                reservation.date.to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export rooms to CSV format
    pub fn export_rooms_csv<W: Write>(&self, writer: W) -> Result<usize, AppError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["id", "category", "rate"])?;

        let mut count = 0;
        for room in self.service.rooms() {
            csv_writer.write_record([
                room.id.to_string(),
                room.category.to_string(),
                room.rate.to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export rooms and bookings as a pretty-printed JSON snapshot
    pub fn export_full_json<W: Write>(&self, mut writer: W) -> Result<HotelSnapshot, AppError> {
        let snapshot = HotelSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            name: self.service.name().to_string(),
            currency: self.service.currency().to_string(),
            rooms: self.service.rooms().into_iter().cloned().collect(),
            reservations: self.service.list_all(),
        };

        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        writeln!(writer)?;
        Ok(snapshot)
    }
}
