// ── Input validation ──
//
// Pure checks run before anything is sent to the API. Field-level failures
// are collected into `ValidationErrors`; the stay rule (check-in strictly
// before check-out) is a separate domain error.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::CoreError;

/// Every input field of the three entity forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FormField {
    RoomNumber,
    RoomType,
    RoomPrice,
    RoomStatus,
    GuestName,
    GuestEmail,
    GuestPhone,
    BookingGuest,
    BookingRoom,
    CheckIn,
    CheckOut,
    BookingStatus,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            Self::RoomNumber => "Room Number",
            Self::RoomType => "Room Type",
            Self::RoomPrice => "Price per Night",
            Self::RoomStatus | Self::BookingStatus => "Status",
            Self::GuestName => "Full Name",
            Self::GuestEmail => "Email",
            Self::GuestPhone => "Phone",
            Self::BookingGuest => "Guest",
            Self::BookingRoom => "Room",
            Self::CheckIn => "Check-in Date",
            Self::CheckOut => "Check-out Date",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

/// Field errors from one submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn push(&mut self, field: FormField, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Collapse into `Ok(value)` when nothing failed.
    pub fn into_result<T>(self, value: T) -> Result<T, CoreError> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(CoreError::ValidationFailed { errors: self })
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.field.label(), e.message)?;
        }
        Ok(())
    }
}

// ── Validators ──────────────────────────────────────────────────────

/// The JavaScript `\s` class. Unlike `char::is_whitespace` it includes the
/// byte-order mark and excludes U+0085.
fn is_js_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0b}'
            | '\u{0c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a `.` inside the
/// domain with at least one character on each side.
///
/// Same language as `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
pub fn is_valid_email(candidate: &str) -> bool {
    if candidate.chars().any(is_js_space) {
        return false;
    }
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Room numbers are positive integers.
pub fn parse_room_number(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|n| *n > 0)
}

/// Prices are positive, finite amounts.
pub fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .trim_start_matches('$')
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
}

/// Non-empty after trimming.
pub fn required(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Check-in must come strictly before check-out.
pub fn validate_stay(check_in: NaiveDate, check_out: NaiveDate) -> Result<(), CoreError> {
    if check_in < check_out {
        Ok(())
    } else {
        Err(CoreError::InvalidStay)
    }
}
