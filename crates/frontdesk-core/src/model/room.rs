// ── Room domain types ──

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// Room category. Codes the client does not know are carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoomType {
    Single,
    Double,
    Deluxe,
    Suite,
    Other(String),
}

impl RoomType {
    /// The categories offered by the room form, in display order.
    pub const KNOWN: [RoomType; 4] = [Self::Single, Self::Double, Self::Deluxe, Self::Suite];

    /// Wire code (`single`, `double`, ...).
    pub fn code(&self) -> &str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Deluxe => "deluxe",
            Self::Suite => "suite",
            Self::Other(code) => code,
        }
    }

    /// Human label. Unknown codes pass through unchanged.
    pub fn label(&self) -> &str {
        match self {
            Self::Single => "Single Room",
            Self::Double => "Double Room",
            Self::Deluxe => "Deluxe Suite",
            Self::Suite => "Executive Suite",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<&str> for RoomType {
    fn from(code: &str) -> Self {
        match code {
            "single" => Self::Single,
            "double" => Self::Double,
            "deluxe" => Self::Deluxe,
            "suite" => Self::Suite,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for RoomType {
    fn from(code: String) -> Self {
        Self::from(code.as_str())
    }
}

impl From<RoomType> for String {
    fn from(t: RoomType) -> Self {
        match t {
            RoomType::Other(code) => code,
            known => known.code().to_owned(),
        }
    }
}

impl FromStr for RoomType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Room housekeeping status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
    Other(String),
}

impl RoomStatus {
    pub const KNOWN: [RoomStatus; 3] = [Self::Available, Self::Occupied, Self::Maintenance];

    pub fn code(&self) -> &str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
            Self::Other(code) => code,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<&str> for RoomStatus {
    fn from(code: &str) -> Self {
        match code {
            "available" => Self::Available,
            "occupied" => Self::Occupied,
            "maintenance" => Self::Maintenance,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for RoomStatus {
    fn from(code: String) -> Self {
        Self::from(code.as_str())
    }
}

impl From<RoomStatus> for String {
    fn from(s: RoomStatus) -> Self {
        match s {
            RoomStatus::Other(code) => code,
            known => known.code().to_owned(),
        }
    }
}

impl FromStr for RoomStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: EntityId,
    pub number: i64,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Nightly rate.
    pub price: f64,
    pub status: RoomStatus,
}

impl Room {
    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }
}
