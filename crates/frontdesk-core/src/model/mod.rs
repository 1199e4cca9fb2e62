// ── Domain model ──

pub mod booking;
pub mod entity_id;
pub mod guest;
pub mod kind;
pub mod room;

pub use booking::{Booking, BookingStatus, GuestRef, RoomRef};
pub use entity_id::EntityId;
pub use guest::Guest;
pub use kind::{EmptyState, EntityKind};
pub use room::{Room, RoomStatus, RoomType};
