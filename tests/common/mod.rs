// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::NaiveDate;
use innkeep::application::{Clock, HotelService};
use innkeep::domain::{Catalog, Room};

/// The date every test treats as today, so fixed 2025 dates stay in the future.
pub const TODAY: &str = "2025-05-01";

/// Helper to parse a date string into NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

pub fn fixed_clock() -> Clock {
    Clock::Fixed(parse_date(TODAY))
}

/// Test fixture: Standard room setup
pub struct StandardRooms;

impl StandardRooms {
    /// Rooms 101 (Single, 15000) and 102 (Double, 20000)
    pub fn basic() -> Vec<Room> {
        vec![Room::single(101, 15000), Room::double(102, 20000)]
    }

    /// Basic rooms plus 103 (Single, 18000)
    pub fn full() -> Vec<Room> {
        let mut rooms = Self::basic();
        rooms.push(Room::single(103, 18000));
        rooms
    }
}

/// Helper to create a service over the basic rooms with a fixed clock
pub fn test_service() -> HotelService {
    HotelService::new(
        "Best Hotel",
        Catalog::with_rooms(StandardRooms::basic()),
        fixed_clock(),
    )
}
