// End-to-end handler tests for `BackOffice` against a wiremock backend.
#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use serde_json::json;
use url::Url;
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use frontdesk_core::{
    BackOffice, BackOfficeConfig, ConnectionState, CoreError, EntityId, EntityKind, FormField,
    LoadState, Severity,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
}

fn back_office(server: &MockServer) -> BackOffice {
    let config = BackOfficeConfig::new(Url::parse(&server.uri()).unwrap());
    BackOffice::new(config).unwrap().with_today(today())
}

fn rooms_body() -> serde_json::Value {
    json!([
        { "_id": "r1", "number": 101, "type": "single", "price": 80, "status": "available" },
        { "_id": "r2", "number": 201, "type": "suite", "price": 320, "status": "occupied" },
    ])
}

fn guests_body() -> serde_json::Value {
    json!([
        { "_id": "g1", "name": "Ada Lovelace", "email": "ada@example.com", "phone": "555-0100" },
        { "_id": "g2", "name": "Alan Turing", "email": "alan@example.com", "phone": "555-0101" },
    ])
}

fn bookings_body() -> serde_json::Value {
    json!([
        {
            "_id": "b1",
            "guestId": { "_id": "g1", "name": "Ada Lovelace", "email": "ada@example.com" },
            "roomId": { "_id": "r2", "number": 201, "price": 320, "type": "suite" },
            "checkIn": "2026-03-09T00:00:00.000Z",
            "checkOut": "2026-03-12T00:00:00.000Z",
            "status": "checked-in",
            "totalPrice": 960
        },
        {
            "_id": "b2",
            "guestId": { "_id": "g1", "name": "Ada Lovelace", "email": "ada@example.com" },
            "roomId": { "_id": "r1", "number": 101, "price": 80, "type": "single" },
            "checkIn": "2026-03-10",
            "checkOut": "2026-03-12",
            "status": "booked"
        },
        {
            "_id": "b3",
            "guestId": "g2",
            "roomId": "r1",
            "checkIn": "2026-04-01",
            "checkOut": "2026-04-03",
            "status": "booked"
        },
    ])
}

async fn mount_collections(server: &MockServer) {
    for (route, body) in [
        ("/api/rooms", rooms_body()),
        ("/api/guests", guests_body()),
        ("/api/bookings", bookings_body()),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }
}

fn last_toast(back_office: &BackOffice) -> (Severity, String) {
    let toast = back_office.toasts().live().last().unwrap();
    (toast.severity, toast.message.clone())
}

// ── Loading ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_load_all_fills_lists_and_dashboard() {
    let server = MockServer::start().await;
    mount_collections(&server).await;
    let mut bo = back_office(&server);

    bo.load_all().await.unwrap();

    assert_eq!(bo.rooms().len(), 2);
    assert_eq!(bo.guests().len(), 2);
    assert_eq!(bo.bookings().len(), 3);
    assert_eq!(bo.rooms().summary(), "Showing 2 items");

    // Ada has two bookings, Alan one
    assert_eq!(bo.guests().rows()[0].cells[3], "2 bookings");
    assert_eq!(bo.guests().rows()[1].cells[3], "1 booking");

    let dashboard = bo.dashboard();
    assert_eq!(dashboard.total_rooms, 2);
    assert_eq!(dashboard.total_guests, 2);
    assert_eq!(dashboard.active_bookings, 3);
    assert!((dashboard.revenue - 320.0).abs() < 1e-9);

    assert_eq!(bo.room_option_list().len(), 1);
    assert_eq!(bo.room_option_list()[0].id, EntityId::from("r1"));
    assert_eq!(
        bo.guest_option_list()[1].label,
        "Alan Turing (alan@example.com)"
    );
    assert!(bo.toasts().is_empty());
}

#[tokio::test]
async fn test_load_all_reports_failed_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rooms"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "database offline" })),
        )
        .mount(&server)
        .await;
    for (route, body) in [("/api/guests", guests_body()), ("/api/bookings", bookings_body())] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
    }
    let mut bo = back_office(&server);

    let err = bo.load_all().await.unwrap_err();

    assert!(matches!(err, CoreError::Api { status: Some(500), .. }));
    assert!(matches!(bo.rooms().state(), LoadState::Failed(_)));
    let message = bo.rooms().error().unwrap();
    assert!(message.starts_with("Error loading rooms:"), "{message}");
    assert!(message.contains("database offline"));

    // the other collections still load
    assert_eq!(bo.guests().len(), 2);
    assert_eq!(bo.bookings().len(), 3);

    assert_eq!(
        last_toast(&bo),
        (Severity::Error, "Error loading initial data".into())
    );
}

#[tokio::test]
async fn test_refresh_toasts_success() {
    let server = MockServer::start().await;
    mount_collections(&server).await;
    let mut bo = back_office(&server);

    bo.refresh().await.unwrap();

    assert_eq!(
        last_toast(&bo),
        (Severity::Success, "Data refreshed successfully".into())
    );
}

#[tokio::test]
async fn test_check_connection_unreachable() {
    let config = BackOfficeConfig::new(Url::parse("http://127.0.0.1:9").unwrap());
    let mut bo = BackOffice::new(config).unwrap();

    assert!(bo.check_connection().await.is_err());

    assert!(matches!(
        bo.connection(),
        ConnectionState::Disconnected { .. }
    ));
    let (severity, message) = last_toast(&bo);
    assert_eq!(severity, Severity::Error);
    assert!(message.starts_with("Cannot connect to backend:"));
}

#[tokio::test]
async fn test_check_connection_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Hotel API"))
        .mount(&server)
        .await;
    let mut bo = back_office(&server);

    bo.check_connection().await.unwrap();

    assert_eq!(bo.connection(), &ConnectionState::Connected);
    assert_eq!(
        last_toast(&bo),
        (Severity::Success, "Connected to backend API".into())
    );
}

// ── Filters ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_filters_toast_visible_counts() {
    let server = MockServer::start().await;
    mount_collections(&server).await;
    let mut bo = back_office(&server);
    bo.load_all().await.unwrap();

    assert_eq!(bo.filter_available_rooms(), 1);
    assert_eq!(
        last_toast(&bo),
        (Severity::Info, "Showing 1 available rooms".into())
    );

    assert_eq!(bo.filter_bookings_today(), 1);
    assert_eq!(
        last_toast(&bo),
        (Severity::Info, "Showing 1 bookings for today".into())
    );

    assert_eq!(bo.filter_upcoming_bookings(), 1);
    assert_eq!(bo.bookings().summary(), "Showing 1 items");

    assert_eq!(bo.clear_filter(EntityKind::Booking), 3);
    assert_eq!(bo.search(EntityKind::Guest, "TURING"), 1);
    assert_eq!(bo.search(EntityKind::Guest, ""), 2);
}

// ── Forms ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_invalid_room_form_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let mut bo = back_office(&server);

    bo.open_room_form();
    bo.room_form_mut().set(FormField::RoomNumber, "abc");
    bo.room_form_mut().set(FormField::RoomType, "double");
    bo.room_form_mut().set(FormField::RoomPrice, "0");

    let err = bo.submit_room_form().await.unwrap_err();

    assert!(matches!(err, CoreError::ValidationFailed { .. }));
    assert!(bo.room_form().is_open());
    assert_eq!(
        bo.room_form().error(FormField::RoomNumber),
        Some("Please enter a valid room number")
    );
    assert_eq!(
        bo.room_form().error(FormField::RoomPrice),
        Some("Please enter a valid price")
    );
    assert!(bo.toasts().is_empty());
}

#[tokio::test]
async fn test_create_room_closes_form_and_reloads() {
    let server = MockServer::start().await;
    mount_collections(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/rooms"))
        .and(body_json(json!({
            "number": 305,
            "type": "deluxe",
            "price": 210.0,
            "status": "available"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "r9", "number": 305, "type": "deluxe", "price": 210, "status": "available"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let mut bo = back_office(&server);

    bo.open_room_form();
    bo.room_form_mut().set(FormField::RoomNumber, "305");
    bo.room_form_mut().set(FormField::RoomType, "deluxe");
    bo.room_form_mut().set(FormField::RoomPrice, "210");

    let id = bo.submit_room_form().await.unwrap();

    assert_eq!(id, EntityId::from("r9"));
    assert!(!bo.room_form().is_open());
    assert_eq!(bo.rooms().len(), 2);
    assert_eq!(bo.dashboard().total_rooms, 2);
    assert_eq!(
        last_toast(&bo),
        (Severity::Success, "Room created successfully!".into())
    );
}

#[tokio::test]
async fn test_create_guest_failure_keeps_form_open() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/guests"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Email already registered" })),
        )
        .mount(&server)
        .await;
    let mut bo = back_office(&server);

    bo.open_guest_form();
    bo.guest_form_mut().set(FormField::GuestName, "Ada Lovelace");
    bo.guest_form_mut().set(FormField::GuestEmail, "ada@example.com");
    bo.guest_form_mut().set(FormField::GuestPhone, "555-0100");

    let err = bo.submit_guest_form().await.unwrap_err();

    assert!(matches!(err, CoreError::Api { status: Some(400), .. }));
    assert!(bo.guest_form().is_open());
    let (severity, message) = last_toast(&bo);
    assert_eq!(severity, Severity::Error);
    assert!(message.starts_with("Error: Failed to create guest:"), "{message}");
    assert!(message.contains("Email already registered"));
}

#[tokio::test]
async fn test_booking_stay_must_be_positive() {
    let server = MockServer::start().await;
    mount_collections(&server).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let mut bo = back_office(&server);

    bo.open_booking_form().await;
    assert_eq!(bo.guest_option_list().len(), 2);
    assert_eq!(bo.room_option_list().len(), 1);

    let form = bo.booking_form_mut();
    form.set(FormField::BookingGuest, "g1");
    form.set(FormField::BookingRoom, "r1");
    form.set(FormField::CheckIn, "2026-03-12");
    form.set(FormField::CheckOut, "2026-03-12");

    let err = bo.submit_booking_form().await.unwrap_err();

    assert!(matches!(err, CoreError::InvalidStay));
    assert!(bo.booking_form().is_open());
    assert_eq!(
        last_toast(&bo),
        (
            Severity::Error,
            "Check-out date must be after check-in date".into()
        )
    );
}

#[tokio::test]
async fn test_edit_missing_room_is_not_found() {
    let server = MockServer::start().await;
    mount_collections(&server).await;
    let mut bo = back_office(&server);

    let err = bo.edit_room(&EntityId::from("nope")).await.unwrap_err();

    assert!(matches!(err, CoreError::NotFound { kind: EntityKind::Room, .. }));
    assert!(!bo.room_form().is_open());
}

#[tokio::test]
async fn test_update_of_vanished_room_is_not_found() {
    let server = MockServer::start().await;
    mount_collections(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/rooms/r1"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Room not found" })),
        )
        .mount(&server)
        .await;
    let mut bo = back_office(&server);

    bo.edit_room(&EntityId::from("r1")).await.unwrap();
    bo.room_form_mut().set(FormField::RoomPrice, "95");
    let err = bo.submit_room_form().await.unwrap_err();

    assert!(matches!(
        err,
        CoreError::NotFound { kind: EntityKind::Room, ref id } if id == "r1"
    ));
    assert!(bo.room_form().is_open());
    let (severity, message) = last_toast(&bo);
    assert_eq!(severity, Severity::Error);
    assert!(message.starts_with("Error: Failed to update room:"), "{message}");
}

#[tokio::test]
async fn test_edit_booking_keeps_current_room_selectable() {
    let server = MockServer::start().await;
    mount_collections(&server).await;
    let mut bo = back_office(&server);

    bo.edit_booking(&EntityId::from("b1")).await.unwrap();

    assert_eq!(bo.booking_form().editing(), Some(&EntityId::from("b1")));
    assert_eq!(bo.booking_form().value(FormField::BookingRoom), "r2");
    let ids: Vec<_> = bo
        .room_option_list()
        .iter()
        .map(|o| o.id.as_str().to_owned())
        .collect();
    assert_eq!(ids, ["r1", "r2"]);
}

// ── Delete confirmation ─────────────────────────────────────────────

#[tokio::test]
async fn test_confirm_without_target_is_noop() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let mut bo = back_office(&server);

    assert!(!bo.confirm_delete().await.unwrap());
    assert!(bo.toasts().is_empty());
}

#[tokio::test]
async fn test_failed_delete_keeps_modal_open() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/rooms/r1"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "message": "Room has bookings" })),
        )
        .mount(&server)
        .await;
    let mut bo = back_office(&server);

    bo.request_delete(EntityKind::Room, EntityId::from("r1"));
    assert!(bo.confirm_delete().await.is_err());

    assert!(bo.delete_confirmation().is_open());
    let (severity, message) = last_toast(&bo);
    assert_eq!(severity, Severity::Error);
    assert!(message.starts_with("Error deleting room:"), "{message}");
}

#[tokio::test]
async fn test_delete_of_vanished_booking_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/bookings/b9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let mut bo = back_office(&server);

    bo.request_delete(EntityKind::Booking, EntityId::from("b9"));
    let err = bo.confirm_delete().await.unwrap_err();

    assert!(matches!(err, CoreError::NotFound { kind: EntityKind::Booking, .. }));
    assert!(bo.delete_confirmation().is_open());
}

#[tokio::test]
async fn test_delete_guest_reloads_and_closes_modal() {
    let server = MockServer::start().await;
    mount_collections(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/api/guests/g2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "deleted" })))
        .expect(1)
        .mount(&server)
        .await;
    let mut bo = back_office(&server);

    bo.request_delete(EntityKind::Guest, EntityId::from("g1"));
    bo.request_delete(EntityKind::Guest, EntityId::from("g2"));
    assert!(bo.confirm_delete().await.unwrap());

    assert!(!bo.delete_confirmation().is_open());
    assert_eq!(bo.guests().state(), &LoadState::Loaded);
    assert_eq!(bo.bookings().state(), &LoadState::Loaded);
    assert_eq!(
        last_toast(&bo),
        (Severity::Success, "Guest deleted successfully!".into())
    );
}

// ── Check-in / check-out ────────────────────────────────────────────

#[tokio::test]
async fn test_check_in_sends_full_booking() {
    let server = MockServer::start().await;
    mount_collections(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/bookings/b2"))
        .and(body_json(json!({
            "guestId": "g1",
            "roomId": "r1",
            "checkIn": "2026-03-10",
            "checkOut": "2026-03-12",
            "status": "checked-in"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "b2",
            "guestId": "g1",
            "roomId": "r1",
            "checkIn": "2026-03-10",
            "checkOut": "2026-03-12",
            "status": "checked-in"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let mut bo = back_office(&server);

    bo.check_in(&EntityId::from("b2")).await.unwrap();

    assert_eq!(
        last_toast(&bo),
        (Severity::Success, "Guest checked in successfully!".into())
    );
}

#[tokio::test]
async fn test_check_out_requires_checked_in() {
    let server = MockServer::start().await;
    mount_collections(&server).await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let mut bo = back_office(&server);

    let err = bo.check_out(&EntityId::from("b2")).await.unwrap_err();

    assert!(matches!(err, CoreError::InvalidTransition { .. }));
    assert_eq!(last_toast(&bo).0, Severity::Warning);
}
