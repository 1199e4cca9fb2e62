// Booking resource endpoints.
//
// Bookings come back with `guestId` / `roomId` either populated or as bare
// identifiers; see `types::Reference`.

use tracing::debug;

use crate::types::{BookingPayload, BookingResponse};
use crate::{Error, HotelClient};

impl HotelClient {
    /// `GET /bookings`
    pub async fn list_bookings(&self) -> Result<Vec<BookingResponse>, Error> {
        let bookings: Vec<BookingResponse> = self.get("bookings").await?;
        debug!(count = bookings.len(), "fetched bookings");
        Ok(bookings)
    }

    /// `POST /bookings`
    pub async fn create_booking(&self, payload: &BookingPayload) -> Result<BookingResponse, Error> {
        self.post("bookings", payload).await
    }

    /// `PUT /bookings/{id}`
    ///
    /// Also used for status transitions (check-in, check-out); the server
    /// updates the room's status in response.
    pub async fn update_booking(
        &self,
        id: &str,
        payload: &BookingPayload,
    ) -> Result<BookingResponse, Error> {
        self.put(&format!("bookings/{id}"), payload).await
    }

    /// `DELETE /bookings/{id}`
    pub async fn delete_booking(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("bookings/{id}")).await
    }
}
