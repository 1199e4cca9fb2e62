// ── API-to-domain type conversions ──
//
// Bridges raw `frontdesk_api` response types into canonical
// `frontdesk_core::model` domain types, and typed requests back into wire
// payloads. Dates are reduced to their UTC calendar day.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::warn;

use frontdesk_api::types::{
    BookingPayload, BookingResponse, GuestPayload, GuestResponse, GuestSummary, Reference,
    RoomPayload, RoomResponse, RoomSummary,
};

use crate::error::CoreError;
use crate::model::{Booking, BookingStatus, EntityId, Guest, GuestRef, Room, RoomRef, RoomStatus};
use crate::requests::{BookingRequest, GuestRequest, RoomRequest};

// ── Helpers ────────────────────────────────────────────────────────

/// Parse an API date: `YYYY-MM-DD`, RFC 3339, or a zone-less ISO timestamp.
pub fn parse_api_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

fn guest_ref(reference: Reference<GuestSummary>) -> GuestRef {
    match reference {
        Reference::Id(id) => GuestRef {
            id: EntityId::from(id),
            name: None,
            email: None,
        },
        Reference::Populated(g) => GuestRef {
            id: EntityId::from(g.id),
            name: g.name,
            email: g.email,
        },
    }
}

fn room_ref(reference: Reference<RoomSummary>) -> RoomRef {
    match reference {
        Reference::Id(id) => RoomRef {
            id: EntityId::from(id),
            number: None,
            price: None,
            room_type: None,
        },
        Reference::Populated(r) => RoomRef {
            id: EntityId::from(r.id),
            number: r.number,
            price: r.price,
            room_type: r.room_type.map(Into::into),
        },
    }
}

// ── Responses ──────────────────────────────────────────────────────

impl From<RoomResponse> for Room {
    fn from(r: RoomResponse) -> Self {
        Self {
            id: EntityId::from(r.id),
            number: r.number,
            room_type: r.room_type.into(),
            price: r.price,
            status: r.status.map(RoomStatus::from).unwrap_or_default(),
        }
    }
}

impl From<GuestResponse> for Guest {
    fn from(g: GuestResponse) -> Self {
        Self {
            id: EntityId::from(g.id),
            name: g.name,
            email: g.email,
            phone: g.phone,
        }
    }
}

impl TryFrom<BookingResponse> for Booking {
    type Error = CoreError;

    fn try_from(b: BookingResponse) -> Result<Self, Self::Error> {
        let check_in = parse_api_date(&b.check_in).ok_or_else(|| {
            CoreError::Internal(format!("booking {}: bad check-in date {:?}", b.id, b.check_in))
        })?;
        let check_out = parse_api_date(&b.check_out).ok_or_else(|| {
            CoreError::Internal(format!("booking {}: bad check-out date {:?}", b.id, b.check_out))
        })?;

        Ok(Self {
            id: EntityId::from(b.id),
            guest: b.guest_id.map(guest_ref),
            room: b.room_id.map(room_ref),
            check_in,
            check_out,
            status: b.status.map(BookingStatus::from).unwrap_or_default(),
            total_price: b.total_price,
        })
    }
}

/// Convert a fetched booking collection, skipping documents whose dates
/// cannot be read.
pub fn bookings_from_api(raw: Vec<BookingResponse>) -> Vec<Booking> {
    raw.into_iter()
        .filter_map(|b| match Booking::try_from(b) {
            Ok(booking) => Some(booking),
            Err(e) => {
                warn!(error = %e, "skipping booking");
                None
            }
        })
        .collect()
}

// ── Payloads ───────────────────────────────────────────────────────

impl From<&RoomRequest> for RoomPayload {
    fn from(r: &RoomRequest) -> Self {
        Self {
            number: r.number,
            room_type: r.room_type.code().to_owned(),
            price: r.price,
            status: r.status.code().to_owned(),
        }
    }
}

impl From<&GuestRequest> for GuestPayload {
    fn from(g: &GuestRequest) -> Self {
        Self {
            name: g.name.clone(),
            email: g.email.clone(),
            phone: g.phone.clone(),
        }
    }
}

impl From<&BookingRequest> for BookingPayload {
    fn from(b: &BookingRequest) -> Self {
        Self {
            guest_id: b.guest_id.to_string(),
            room_id: b.room_id.to_string(),
            check_in: crate::format::input_date(b.check_in),
            check_out: crate::format::input_date(b.check_out),
            status: b.status.code().to_owned(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::RoomType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_all_date_shapes() {
        assert_eq!(parse_api_date("2026-03-01"), Some(date(2026, 3, 1)));
        assert_eq!(parse_api_date("2026-03-01T00:00:00.000Z"), Some(date(2026, 3, 1)));
        assert_eq!(parse_api_date("2026-03-01T23:30:00-02:00"), Some(date(2026, 3, 2)));
        assert_eq!(parse_api_date("2026-03-01T10:00:00"), Some(date(2026, 3, 1)));
        assert_eq!(parse_api_date("next tuesday"), None);
        assert_eq!(parse_api_date(""), None);
    }

    #[test]
    fn room_without_status_is_available() {
        let room: Room = RoomResponse {
            id: "r1".into(),
            number: 101,
            room_type: "deluxe".into(),
            price: 150.0,
            status: None,
        }
        .into();
        assert_eq!(room.status, RoomStatus::Available);
        assert_eq!(room.room_type, RoomType::Deluxe);
    }

    #[test]
    fn booking_without_status_is_booked() {
        let raw: BookingResponse = serde_json::from_value(json!({
            "_id": "b1",
            "guestId": "g1",
            "roomId": { "_id": "r1", "number": 101, "price": 80, "type": "single" },
            "checkIn": "2026-03-01T00:00:00.000Z",
            "checkOut": "2026-03-03T00:00:00.000Z"
        }))
        .unwrap();
        let booking = Booking::try_from(raw).unwrap();
        assert_eq!(booking.status, BookingStatus::Booked);
        assert_eq!(booking.guest_id().unwrap().as_str(), "g1");
        assert!(booking.guest.as_ref().unwrap().name.is_none());
        let room = booking.room.as_ref().unwrap();
        assert_eq!(room.number, Some(101));
        assert_eq!(room.room_type, Some(RoomType::Single));
        assert_eq!(booking.nights(), 2);
    }

    #[test]
    fn unreadable_bookings_are_skipped() {
        let raw: Vec<BookingResponse> = serde_json::from_value(json!([
            { "_id": "ok", "checkIn": "2026-03-01", "checkOut": "2026-03-02" },
            { "_id": "bad", "checkIn": "soon", "checkOut": "2026-03-02" },
        ]))
        .unwrap();
        let bookings = bookings_from_api(raw);
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].id.as_str(), "ok");
    }

    #[test]
    fn booking_request_becomes_dated_payload() {
        let payload = BookingPayload::from(&BookingRequest {
            guest_id: EntityId::from("g1"),
            room_id: EntityId::from("r1"),
            check_in: date(2026, 3, 1),
            check_out: date(2026, 3, 4),
            status: BookingStatus::CheckedIn,
        });
        assert_eq!(payload.check_in, "2026-03-01");
        assert_eq!(payload.check_out, "2026-03-04");
        assert_eq!(payload.status, "checked-in");
    }
}
