// ── Dashboard aggregation ──
//
// Summary figures recomputed from freshly fetched collections.
//
// Revenue is a per-day heuristic: every checked-in booking whose stay
// covers today adds one night's worth, either its total price spread over
// its nights or the room's nightly rate. It does not prorate overlapping
// or partial-day stays.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Booking, BookingStatus, Guest, Room};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_rooms: usize,
    pub total_guests: usize,
    /// Bookings that are booked or checked-in.
    pub active_bookings: usize,
    /// Today's revenue estimate.
    pub revenue: f64,
}

impl DashboardSummary {
    pub fn compute(rooms: &[Room], guests: &[Guest], bookings: &[Booking], today: NaiveDate) -> Self {
        Self {
            total_rooms: rooms.len(),
            total_guests: guests.len(),
            active_bookings: bookings.iter().filter(|b| b.status.is_active()).count(),
            revenue: bookings
                .iter()
                .map(|b| booking_daily_revenue(b, rooms, today))
                .sum(),
        }
    }
}

/// What one booking contributes to today's revenue.
///
/// A zero-night stay counts as one night. When the booking only carries a
/// room id, the nightly rate is looked up in `rooms`.
pub fn booking_daily_revenue(booking: &Booking, rooms: &[Room], today: NaiveDate) -> f64 {
    if booking.status != BookingStatus::CheckedIn || !booking.spans(today) {
        return 0.0;
    }
    let Some(room) = &booking.room else {
        return 0.0;
    };

    match booking.total_price.filter(|p| *p != 0.0 && !p.is_nan()) {
        Some(total) => {
            let nights = i32::try_from(booking.nights().max(1)).unwrap_or(i32::MAX);
            total / f64::from(nights)
        }
        None => room
            .price
            .or_else(|| rooms.iter().find(|r| r.id == room.id).map(|r| r.price))
            .unwrap_or(0.0),
    }
}
