//! Back-office logic between `frontdesk-api` and the front ends (CLI / TUI).
//!
//! - **[`BackOffice`]**: the facade. Owns the API client and all controller
//!   state, and exposes one async handler per user action: loading,
//!   searching and filtering, form submission, delete confirmation, and the
//!   check-in/check-out transitions.
//!
//! - **Lists** ([`list`]): [`EntityList<T>`] keeps fetched records next to
//!   their rendered rows and applies search or status filters by toggling
//!   row visibility.
//!
//! - **Forms** ([`form`]): add/edit form state machines with field-level
//!   validation ([`validate`]).
//!
//! - **Notifications** ([`notify`]): expiring toasts and the single-target
//!   delete confirmation.
//!
//! - **Domain model** ([`model`]): `Room`, `Guest`, `Booking` and their
//!   enumerations, decoupled from the wire types.

pub mod config;
pub mod controller;
pub mod convert;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod format;
pub mod list;
pub mod model;
pub mod notify;
pub mod requests;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{BackOfficeConfig, DEFAULT_API_PATH, TlsVerification};
pub use controller::{BackOffice, ConnectionState, SelectOption};
pub use dashboard::DashboardSummary;
pub use error::CoreError;
pub use form::{BookingForm, FormMode, FormState, GuestForm, RoomForm, Submission};
pub use list::{BookingFilter, EntityList, ListRow, LoadState, RoomFilter, RowFilter};
pub use notify::{DeleteConfirmation, DeleteTarget, Severity, Toast, Toasts};
pub use requests::{BookingRequest, GuestRequest, RoomRequest};
pub use validate::{FieldError, FormField, ValidationErrors};

pub use model::{
    Booking, BookingStatus, EmptyState, EntityId, EntityKind, Guest, GuestRef, Room, RoomRef,
    RoomStatus, RoomType,
};
