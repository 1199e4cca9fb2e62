// ── Display formatting ──
//
// Display/wire conversions shared by the CLI tables and the TUI screens.

use chrono::{NaiveDate, Timelike};

use crate::model::Room;

/// `$1234.50`
pub fn currency(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Date as sent to the API and typed into forms: `2026-03-01`.
pub fn input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a form date field.
pub fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Table date: `3/1/2026`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Dashboard header date: `Sunday, March 1, 2026`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Greeting for the local time of day.
pub fn greeting(time: &impl Timelike) -> &'static str {
    match time.hour() {
        0..12 => "Good Morning",
        12..18 => "Good Afternoon",
        _ => "Good Evening",
    }
}

/// List footer: `Showing 3 items`.
pub fn summary(visible: usize) -> String {
    format!("Showing {visible} items")
}

/// Booking-form room option: `Room 101 - Deluxe Suite ($150)`. The price is
/// shown as stored, without currency padding.
pub fn room_option_label(room: &Room) -> String {
    format!(
        "Room {} - {} (${})",
        room.number,
        room.room_type.label(),
        room.price
    )
}
