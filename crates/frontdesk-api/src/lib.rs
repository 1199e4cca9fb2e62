// frontdesk-api: Async Rust client for the hotel back-office REST API

pub mod bookings;
pub mod client;
pub mod error;
pub mod guests;
pub mod rooms;
pub mod transport;
pub mod types;

pub use client::HotelClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
