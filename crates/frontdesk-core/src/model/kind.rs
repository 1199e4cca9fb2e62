// ── Entity kinds ──
//
// Per-kind wording shared by both front ends: collection names, titles,
// delete warnings, and empty-state call-to-action text.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Room,
    Guest,
    Booking,
}

/// Placeholder shown instead of an empty table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
    pub action: &'static str,
}

impl EntityKind {
    /// Capitalized singular: `Room`.
    pub fn title(self) -> &'static str {
        match self {
            Self::Room => "Room",
            Self::Guest => "Guest",
            Self::Booking => "Booking",
        }
    }

    /// Plural resource name: `rooms`.
    pub fn collection(self) -> &'static str {
        match self {
            Self::Room => "rooms",
            Self::Guest => "guests",
            Self::Booking => "bookings",
        }
    }

    /// Text shown by the delete-confirmation modal.
    pub fn delete_warning(self) -> &'static str {
        match self {
            Self::Room => "This will permanently remove the room from your inventory.",
            Self::Guest => "This will permanently remove the guest and all their bookings.",
            Self::Booking => "This will permanently remove the booking record.",
        }
    }

    pub fn empty_state(self) -> EmptyState {
        match self {
            Self::Room => EmptyState {
                title: "No Rooms Found",
                hint: "Get started by adding your first room",
                action: "Add Room",
            },
            Self::Guest => EmptyState {
                title: "No Guests Found",
                hint: "Get started by adding your first guest",
                action: "Add Guest",
            },
            Self::Booking => EmptyState {
                title: "No Bookings Found",
                hint: "Get started by creating your first booking",
                action: "Create Booking",
            },
        }
    }

    /// Column headers of the rendered rows.
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            Self::Room => &["Room #", "Type", "Price", "Status"],
            Self::Guest => &["Name", "Email", "Phone", "Bookings"],
            Self::Booking => &["Guest", "Room", "Check-in", "Check-out", "Status"],
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn display_is_lowercase_singular() {
        assert_eq!(EntityKind::Booking.to_string(), "booking");
        assert_eq!(EntityKind::Guest.as_ref(), "guest");
    }

    #[test]
    fn every_kind_has_wording() {
        for kind in EntityKind::iter() {
            assert!(kind.delete_warning().starts_with("This will permanently remove"));
            assert!(kind.empty_state().title.starts_with("No "));
            assert!(!kind.headers().is_empty());
        }
    }
}
