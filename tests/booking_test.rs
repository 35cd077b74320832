mod common;

use anyhow::Result;
use common::{StandardRooms, fixed_clock, parse_date, test_service};
use innkeep::application::{AppError, HotelService};
use innkeep::domain::{BookingError, Catalog, CatalogError, Reservation, Room, RoomCategory};

#[test]
fn test_room_round_trip_and_overwrite() -> Result<()> {
    let mut service = test_service();

    let room = Room::new(104, RoomCategory::Double, 22000);
    service.add_room(room.clone());
    assert_eq!(service.get_room(104)?, &room);

    // Same id again replaces, never duplicates
    service.add_room(Room::single(104, 12000));
    assert_eq!(service.get_room(104)?.category, RoomCategory::Single);
    assert_eq!(service.rooms().len(), 3);

    Ok(())
}

#[test]
fn test_get_unknown_room() {
    let service = test_service();
    assert!(matches!(
        service.get_room(999),
        Err(AppError::Catalog(CatalogError::RoomNotFound(999)))
    ));
    assert!(!service.has_room(999));
}

#[test]
fn test_book_then_cancel_restores_listing() -> Result<()> {
    let mut service = test_service();
    service.book(102, parse_date("2025-06-01"))?;
    let before = service.list_all();

    service.book(101, parse_date("2025-05-20"))?;
    service.cancel(101, parse_date("2025-05-20"))?;

    assert_eq!(service.list_all(), before);
    Ok(())
}

#[test]
fn test_double_booking_keeps_one_reservation() -> Result<()> {
    let mut service = test_service();
    service.book(101, parse_date("2025-05-10"))?;

    let err = service.book(101, parse_date("2025-05-10")).unwrap_err();
    assert!(matches!(
        err,
        AppError::Booking(BookingError::Conflict { room_id: 101, .. })
    ));
    assert_eq!(
        service.list_all(),
        vec![Reservation::new(101, parse_date("2025-05-10"))]
    );
    Ok(())
}

#[test]
fn test_past_date_rejected_regardless_of_room() {
    let mut service = test_service();

    for room_id in [101, 999] {
        let err = service.book(room_id, parse_date("2025-04-30")).unwrap_err();
        assert!(
            matches!(err, AppError::Booking(BookingError::PastDate { .. })),
            "room {} should fail on the date first",
            room_id
        );
    }
    assert!(service.list_all().is_empty());
}

#[test]
fn test_today_can_be_booked() -> Result<()> {
    let mut service = test_service();
    let today = service.today();
    assert_eq!(service.book(101, today)?, 15000);
    Ok(())
}

#[test]
fn test_unknown_room_with_future_date() {
    let mut service = test_service();
    let err = service.book(999, parse_date("2025-05-10")).unwrap_err();
    assert!(matches!(err, AppError::Booking(BookingError::UnknownRoom(999))));
}

#[test]
fn test_cancel_without_booking_leaves_ledger_unchanged() -> Result<()> {
    let mut service = test_service();
    service.book(102, parse_date("2025-05-11"))?;
    let before = service.list_all();

    let err = service.cancel(101, parse_date("2025-05-11")).unwrap_err();
    assert!(matches!(
        err,
        AppError::Booking(BookingError::NotFound { room_id: 101, .. })
    ));
    assert_eq!(service.list_all(), before);
    Ok(())
}

#[test]
fn test_list_after_partial_cancel() -> Result<()> {
    let mut service = test_service();
    service.book(101, parse_date("2025-05-10"))?;
    service.book(102, parse_date("2025-05-11"))?;
    service.cancel(101, parse_date("2025-05-10"))?;

    assert_eq!(
        service.list_all(),
        vec![Reservation::new(102, parse_date("2025-05-11"))]
    );
    Ok(())
}

#[test]
fn test_reference_scenario() -> Result<()> {
    let mut service = test_service();
    let date = parse_date("2025-05-10");

    assert_eq!(service.book(101, date)?, 15000);
    assert!(matches!(
        service.book(101, date),
        Err(AppError::Booking(BookingError::Conflict { .. }))
    ));

    service.cancel(101, date)?;
    assert!(service.list_all().is_empty());

    assert!(matches!(
        service.book(999, date),
        Err(AppError::Booking(BookingError::UnknownRoom(999)))
    ));
    Ok(())
}

#[test]
fn test_cancelled_slot_can_be_rebooked() -> Result<()> {
    let mut service = test_service();
    let date = parse_date("2025-05-10");

    service.book(102, date)?;
    service.cancel(102, date)?;
    assert_eq!(service.book(102, date)?, 20000);
    assert!(service.is_booked(102, date));
    Ok(())
}

#[test]
fn test_listing_is_sorted_across_rooms() -> Result<()> {
    let catalog = Catalog::with_rooms(StandardRooms::full());
    let mut service = HotelService::new("Best Hotel", catalog, fixed_clock());

    // Booked out of order on purpose
    for (room_id, date) in [
        (103, "2025-05-12"),
        (101, "2025-05-13"),
        (102, "2025-05-14"),
        (101, "2025-05-10"),
        (102, "2025-05-11"),
    ] {
        service.book(room_id, parse_date(date))?;
    }

    let listed: Vec<(u32, String)> = service
        .list_all()
        .into_iter()
        .map(|r| (r.room_id, r.date.to_string()))
        .collect();
    assert_eq!(
        listed,
        vec![
            (101, "2025-05-10".to_string()),
            (101, "2025-05-13".to_string()),
            (102, "2025-05-11".to_string()),
            (102, "2025-05-14".to_string()),
            (103, "2025-05-12".to_string()),
        ]
    );
    assert_eq!(
        service.bookings_for(101)?,
        vec![parse_date("2025-05-10"), parse_date("2025-05-13")]
    );
    Ok(())
}

#[test]
fn test_error_messages_are_actionable() {
    let mut service = test_service();
    service.book(101, parse_date("2025-05-10")).unwrap();

    let conflict = service.book(101, parse_date("2025-05-10")).unwrap_err();
    assert_eq!(conflict.to_string(), "Room 101 is already booked on 2025-05-10");

    let missing = service.cancel(102, parse_date("2025-05-10")).unwrap_err();
    assert_eq!(missing.to_string(), "No booking found for room 102 on 2025-05-10");
}
