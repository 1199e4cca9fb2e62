// Guest resource endpoints.

use tracing::debug;

use crate::types::{GuestPayload, GuestResponse};
use crate::{Error, HotelClient};

impl HotelClient {
    /// `GET /guests`
    pub async fn list_guests(&self) -> Result<Vec<GuestResponse>, Error> {
        let guests: Vec<GuestResponse> = self.get("guests").await?;
        debug!(count = guests.len(), "fetched guests");
        Ok(guests)
    }

    /// `POST /guests`
    pub async fn create_guest(&self, payload: &GuestPayload) -> Result<GuestResponse, Error> {
        self.post("guests", payload).await
    }

    /// `PUT /guests/{id}`
    pub async fn update_guest(
        &self,
        id: &str,
        payload: &GuestPayload,
    ) -> Result<GuestResponse, Error> {
        self.put(&format!("guests/{id}"), payload).await
    }

    /// `DELETE /guests/{id}`
    ///
    /// The server also removes the guest's bookings.
    pub async fn delete_guest(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("guests/{id}")).await
    }
}
