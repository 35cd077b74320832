//! Parsing of textual input at the boundary. The domain only ever sees
//! already-parsed values.

use chrono::NaiveDate;

use crate::domain::{Rate, RoomCategory, RoomId, parse_rate};

use super::AppError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| AppError::MalformedDate(input.to_string()))
}

pub fn parse_room_id(input: &str) -> Result<RoomId, AppError> {
    input
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidRoomId(input.to_string()))
}

pub fn parse_category(input: &str) -> Result<RoomCategory, AppError> {
    input
        .parse()
        .map_err(|_| AppError::InvalidCategory(input.to_string()))
}

pub fn parse_room_rate(input: &str) -> Result<Rate, AppError> {
    parse_rate(input).map_err(|e| AppError::InvalidRate {
        input: input.to_string(),
        reason: e.to_string(),
    })
}
