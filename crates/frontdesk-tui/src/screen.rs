//! Screen identifier enum.

use std::fmt;

use frontdesk_core::EntityKind;

/// Identifies each primary TUI screen, navigable by number keys 1-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Dashboard, // 1
    Rooms,    // 2
    Guests,   // 3
    Bookings, // 4
}

impl ScreenId {
    /// All screens in tab-bar order.
    pub const ALL: [ScreenId; 4] = [Self::Dashboard, Self::Rooms, Self::Guests, Self::Bookings];

    /// Numeric key (1-4) for this screen.
    pub fn number(self) -> u8 {
        match self {
            Self::Dashboard => 1,
            Self::Rooms => 2,
            Self::Guests => 3,
            Self::Bookings => 4,
        }
    }

    /// Screen from a numeric key. Returns None for out-of-range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Dashboard),
            2 => Some(Self::Rooms),
            3 => Some(Self::Guests),
            4 => Some(Self::Bookings),
            _ => None,
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    /// Next screen in tab order (wraps around).
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous screen in tab order (wraps around).
    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// The entity listed on this screen, if any.
    pub fn kind(self) -> Option<EntityKind> {
        match self {
            Self::Dashboard => None,
            Self::Rooms => Some(EntityKind::Room),
            Self::Guests => Some(EntityKind::Guest),
            Self::Bookings => Some(EntityKind::Booking),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Rooms => "Rooms",
            Self::Guests => "Guests",
            Self::Bookings => "Bookings",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
