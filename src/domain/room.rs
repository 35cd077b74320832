use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{Rate, format_rate};

/// Room number as printed on the door.
pub type RoomId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    /// One bed
    Single,
    /// Two beds
    Double,
}

impl RoomCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomCategory::Single => "single",
            RoomCategory::Double => "double",
        }
    }

    /// Human-readable label used in room descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            RoomCategory::Single => "Single room",
            RoomCategory::Double => "Double room",
        }
    }
}

impl FromStr for RoomCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(RoomCategory::Single),
            "double" => Ok(RoomCategory::Double),
            other => Err(format!("unknown room category '{}'", other)),
        }
    }
}

impl std::fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A bookable room. Rooms are values: redefining a room means adding a new
/// one under the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRoom")]
pub struct Room {
    pub id: RoomId,
    pub category: RoomCategory,
    /// Flat price per night
    pub rate: Rate,
}

/// Wire form of a room, validated before it becomes a `Room`.
#[derive(Deserialize)]
struct RawRoom {
    id: RoomId,
    category: RoomCategory,
    rate: Rate,
}

impl TryFrom<RawRoom> for Room {
    type Error = String;

    fn try_from(raw: RawRoom) -> Result<Self, Self::Error> {
        if raw.rate <= 0 {
            return Err(format!("room {} must have a positive rate", raw.id));
        }
        Ok(Room::new(raw.id, raw.category, raw.rate))
    }
}

impl Room {
    pub fn new(id: RoomId, category: RoomCategory, rate: Rate) -> Self {
        assert!(rate > 0, "Room rate must be positive");
        Self { id, category, rate }
    }

    pub fn single(id: RoomId, rate: Rate) -> Self {
        Self::new(id, RoomCategory::Single, rate)
    }

    pub fn double(id: RoomId, rate: Rate) -> Self {
        Self::new(id, RoomCategory::Double, rate)
    }

    /// Render the room as "<label>, number <id>, rate <rate> <currency>".
    pub fn describe(&self, currency: &str) -> String {
        format!(
            "{}, number {}, rate {}",
            self.category.label(),
            self.id,
            format_rate(self.rate, currency)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_category_roundtrip() {
        for category in [RoomCategory::Single, RoomCategory::Double] {
            let parsed: RoomCategory = category.as_str().parse().unwrap();
            assert_eq!(category, parsed);
        }
    }

    #[test]
    fn test_room_category_parse_is_case_insensitive() {
        assert_eq!("Double".parse::<RoomCategory>(), Ok(RoomCategory::Double));
        assert_eq!(" SINGLE ".parse::<RoomCategory>(), Ok(RoomCategory::Single));
        assert!("suite".parse::<RoomCategory>().is_err());
    }

    #[test]
    fn test_describe_room() {
        let room = Room::single(101, 15000);
        assert_eq!(room.describe("Ft"), "Single room, number 101, rate 15000 Ft");

        let room = Room::double(102, 20000);
        assert_eq!(room.describe("Ft"), "Double room, number 102, rate 20000 Ft");
    }

    #[test]
    fn test_room_serializes_category_lowercase() {
        let json = serde_json::to_string(&Room::double(102, 20000)).unwrap();
        assert_eq!(json, r#"{"id":102,"category":"double","rate":20000}"#);
    }

    #[test]
    fn test_room_deserializes_valid_rate() {
        let room: Room =
            serde_json::from_str(r#"{"id":101,"category":"single","rate":15000}"#).unwrap();
        assert_eq!(room, Room::single(101, 15000));
    }

    #[test]
    fn test_room_deserialize_rejects_non_positive_rate() {
        for json in [
            r#"{"id":1,"category":"single","rate":0}"#,
            r#"{"id":1,"category":"double","rate":-500}"#,
        ] {
            let err = serde_json::from_str::<Room>(json).unwrap_err();
            assert!(err.to_string().contains("must have a positive rate"));
        }
    }

    #[test]
    #[should_panic(expected = "Room rate must be positive")]
    fn test_room_requires_positive_rate() {
        Room::single(101, 0);
    }
}
