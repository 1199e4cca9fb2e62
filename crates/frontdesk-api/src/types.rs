// Wire types for the hotel REST API.
//
// Field names follow the API's JSON (`_id`, camelCase). Response types are
// lenient: missing fields fall back to defaults so a sparse document still
// decodes. Payload types are what the client sends on create/update.

use serde::{Deserialize, Serialize};

/// Anything the API identifies with an `_id`.
pub trait Identified {
    fn id(&self) -> &str;
}

// ── References ──────────────────────────────────────────────────────

/// A foreign key that the API may return either as a bare identifier or
/// as the populated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference<T> {
    Id(String),
    Populated(T),
}

impl<T: Identified> Reference<T> {
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Populated(doc) => doc.id(),
        }
    }

    pub fn populated(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Populated(doc) => Some(doc),
        }
    }
}

/// Populated guest reference embedded in a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Identified for GuestSummary {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Populated room reference embedded in a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub number: Option<i64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(rename = "type", default)]
    pub room_type: Option<String>,
}

impl Identified for RoomSummary {
    fn id(&self) -> &str {
        &self.id
    }
}

// ── Responses ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub number: i64,
    #[serde(rename = "type", default)]
    pub room_type: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub status: Option<String>,
}

impl Identified for RoomResponse {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl Identified for GuestResponse {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub guest_id: Option<Reference<GuestSummary>>,
    #[serde(default)]
    pub room_id: Option<Reference<RoomSummary>>,
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_price: Option<f64>,
}

impl Identified for BookingResponse {
    fn id(&self) -> &str {
        &self.id
    }
}

// ── Payloads ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomPayload {
    pub number: i64,
    #[serde(rename = "type")]
    pub room_type: String,
    pub price: f64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Booking create/update body. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub guest_id: String,
    pub room_id: String,
    pub check_in: String,
    pub check_out: String,
    pub status: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn booking_accepts_populated_and_bare_references() {
        let populated: BookingResponse = serde_json::from_value(json!({
            "_id": "b1",
            "guestId": { "_id": "g1", "name": "Ada", "email": "ada@example.com" },
            "roomId": { "_id": "r1", "number": 101, "price": 80.0, "type": "single" },
            "checkIn": "2026-03-01T00:00:00.000Z",
            "checkOut": "2026-03-04T00:00:00.000Z",
            "status": "checked-in",
            "totalPrice": 240.0
        }))
        .unwrap();
        let guest = populated.guest_id.as_ref().unwrap();
        assert_eq!(guest.id(), "g1");
        assert_eq!(guest.populated().unwrap().name.as_deref(), Some("Ada"));
        assert_eq!(
            populated.room_id.as_ref().unwrap().populated().unwrap().number,
            Some(101)
        );

        let bare: BookingResponse = serde_json::from_value(json!({
            "_id": "b2",
            "guestId": "g2",
            "roomId": null,
            "checkIn": "2026-03-01",
            "checkOut": "2026-03-02"
        }))
        .unwrap();
        assert_eq!(bare.guest_id.as_ref().unwrap().id(), "g2");
        assert!(bare.guest_id.as_ref().unwrap().populated().is_none());
        assert!(bare.room_id.is_none());
        assert!(bare.status.is_none());
        assert!(bare.total_price.is_none());
    }

    #[test]
    fn payloads_use_api_field_names() {
        let room = serde_json::to_value(RoomPayload {
            number: 101,
            room_type: "deluxe".into(),
            price: 150.0,
            status: "available".into(),
        })
        .unwrap();
        assert_eq!(room["type"], "deluxe");

        let booking = serde_json::to_value(BookingPayload {
            guest_id: "g1".into(),
            room_id: "r1".into(),
            check_in: "2026-03-01".into(),
            check_out: "2026-03-02".into(),
            status: "booked".into(),
        })
        .unwrap();
        assert_eq!(booking["guestId"], "g1");
        assert_eq!(booking["roomId"], "r1");
        assert_eq!(booking["checkIn"], "2026-03-01");
        assert_eq!(booking["checkOut"], "2026-03-02");
    }
}
