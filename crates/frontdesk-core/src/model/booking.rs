// ── Booking domain types ──

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;
use super::room::RoomType;

/// Booking lifecycle status.
///
/// `booked -> checked-in -> checked-out`. Values the client does not know
/// are carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    #[default]
    Booked,
    CheckedIn,
    CheckedOut,
    Other(String),
}

impl BookingStatus {
    pub const KNOWN: [BookingStatus; 3] = [Self::Booked, Self::CheckedIn, Self::CheckedOut];

    pub fn code(&self) -> &str {
        match self {
            Self::Booked => "booked",
            Self::CheckedIn => "checked-in",
            Self::CheckedOut => "checked-out",
            Self::Other(code) => code,
        }
    }

    /// Booked or checked-in.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Booked | Self::CheckedIn)
    }

    /// Transitions this client initiates on its own.
    pub fn can_transition_to(&self, next: &BookingStatus) -> bool {
        matches!(
            (self, next),
            (Self::Booked, Self::CheckedIn) | (Self::CheckedIn, Self::CheckedOut)
        )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<&str> for BookingStatus {
    fn from(code: &str) -> Self {
        match code {
            "booked" => Self::Booked,
            "checked-in" => Self::CheckedIn,
            "checked-out" => Self::CheckedOut,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for BookingStatus {
    fn from(code: String) -> Self {
        Self::from(code.as_str())
    }
}

impl From<BookingStatus> for String {
    fn from(s: BookingStatus) -> Self {
        match s {
            BookingStatus::Other(code) => code,
            known => known.code().to_owned(),
        }
    }
}

impl FromStr for BookingStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Guest side of a booking, as much as the API populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRef {
    pub id: EntityId,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Room side of a booking, as much as the API populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRef {
    pub id: EntityId,
    pub number: Option<i64>,
    pub price: Option<f64>,
    pub room_type: Option<RoomType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: EntityId,
    pub guest: Option<GuestRef>,
    pub room: Option<RoomRef>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
    pub total_price: Option<f64>,
}

impl Booking {
    /// Whole days between check-in and check-out.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Whether `day` falls inside the stay window, both ends inclusive.
    pub fn spans(&self, day: NaiveDate) -> bool {
        self.check_in <= day && day <= self.check_out
    }

    pub fn guest_name(&self) -> &str {
        self.guest
            .as_ref()
            .and_then(|g| g.name.as_deref())
            .unwrap_or("N/A")
    }

    /// `Room 101`, or `Room N/A` when the room is unknown.
    pub fn room_label(&self) -> String {
        match self.room.as_ref().and_then(|r| r.number) {
            Some(number) => format!("Room {number}"),
            None => "Room N/A".into(),
        }
    }

    pub fn guest_id(&self) -> Option<&EntityId> {
        self.guest.as_ref().map(|g| &g.id)
    }

    pub fn room_id(&self) -> Option<&EntityId> {
        self.room.as_ref().map(|r| &r.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    fn booking(check_in: NaiveDate, check_out: NaiveDate) -> Booking {
        Booking {
            id: EntityId::from("b1"),
            guest: None,
            room: None,
            check_in,
            check_out,
            status: BookingStatus::Booked,
            total_price: None,
        }
    }

    #[test]
    fn lifecycle_transitions() {
        assert!(BookingStatus::Booked.can_transition_to(&BookingStatus::CheckedIn));
        assert!(BookingStatus::CheckedIn.can_transition_to(&BookingStatus::CheckedOut));
        assert!(!BookingStatus::Booked.can_transition_to(&BookingStatus::CheckedOut));
        assert!(!BookingStatus::CheckedOut.can_transition_to(&BookingStatus::CheckedIn));
        assert!(!BookingStatus::Other("cancelled".into()).can_transition_to(&BookingStatus::CheckedIn));
    }

    #[test]
    fn active_statuses() {
        assert!(BookingStatus::Booked.is_active());
        assert!(BookingStatus::CheckedIn.is_active());
        assert!(!BookingStatus::CheckedOut.is_active());
        assert!(!BookingStatus::Other("cancelled".into()).is_active());
    }

    #[test]
    fn stay_window_is_inclusive() {
        let b = booking(date(2026, 3, 1), date(2026, 3, 4));
        assert_eq!(b.nights(), 3);
        assert!(b.spans(date(2026, 3, 1)));
        assert!(b.spans(date(2026, 3, 4)));
        assert!(!b.spans(date(2026, 2, 28)));
        assert!(!b.spans(date(2026, 3, 5)));
    }

    #[test]
    fn labels_fall_back_when_unpopulated() {
        let mut b = booking(date(2026, 3, 1), date(2026, 3, 2));
        assert_eq!(b.guest_name(), "N/A");
        assert_eq!(b.room_label(), "Room N/A");

        b.guest = Some(GuestRef {
            id: EntityId::from("g1"),
            name: Some("Ada".into()),
            email: None,
        });
        b.room = Some(RoomRef {
            id: EntityId::from("r1"),
            number: Some(101),
            price: None,
            room_type: None,
        });
        assert_eq!(b.guest_name(), "Ada");
        assert_eq!(b.room_label(), "Room 101");
    }
}
