use chrono::NaiveDate;
use thiserror::Error;

use super::RoomId;

/// Failures of ledger operations. Each variant is a distinct kind so callers
/// can match on it instead of inspecting the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Cannot book a date in the past: {date} (today is {today})")]
    PastDate { date: NaiveDate, today: NaiveDate },

    #[error("Room {0} does not exist in this hotel")]
    UnknownRoom(RoomId),

    #[error("Room {room_id} is already booked on {date}")]
    Conflict { room_id: RoomId, date: NaiveDate },

    #[error("No booking found for room {room_id} on {date}")]
    NotFound { room_id: RoomId, date: NaiveDate },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Room not found: {0}")]
    RoomNotFound(RoomId),
}
