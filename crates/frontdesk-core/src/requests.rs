// ── Typed mutation requests ──
//
// What a validated form (or CLI flag set) hands to the API layer.
// Converted into wire payloads in `convert`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Booking, BookingStatus, EntityId, Guest, Room, RoomStatus, RoomType};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomRequest {
    pub number: i64,
    pub room_type: RoomType,
    pub price: f64,
    pub status: RoomStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub guest_id: EntityId,
    pub room_id: EntityId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
}

impl From<&Room> for RoomRequest {
    fn from(r: &Room) -> Self {
        Self {
            number: r.number,
            room_type: r.room_type.clone(),
            price: r.price,
            status: r.status.clone(),
        }
    }
}

impl From<&Guest> for GuestRequest {
    fn from(g: &Guest) -> Self {
        Self {
            name: g.name.clone(),
            email: g.email.clone(),
            phone: g.phone.clone(),
        }
    }
}

impl BookingRequest {
    /// Re-submit an existing booking with a new status.
    ///
    /// `None` when the booking lost its guest or room reference.
    pub fn with_status(booking: &Booking, status: BookingStatus) -> Option<Self> {
        Some(Self {
            guest_id: booking.guest_id()?.clone(),
            room_id: booking.room_id()?.clone(),
            check_in: booking.check_in,
            check_out: booking.check_out,
            status,
        })
    }
}
