// Room resource endpoints.

use tracing::debug;

use crate::types::{RoomPayload, RoomResponse};
use crate::{Error, HotelClient};

impl HotelClient {
    /// List every room.
    ///
    /// `GET /rooms`
    pub async fn list_rooms(&self) -> Result<Vec<RoomResponse>, Error> {
        let rooms: Vec<RoomResponse> = self.get("rooms").await?;
        debug!(count = rooms.len(), "fetched rooms");
        Ok(rooms)
    }

    /// `POST /rooms`
    pub async fn create_room(&self, payload: &RoomPayload) -> Result<RoomResponse, Error> {
        self.post("rooms", payload).await
    }

    /// `PUT /rooms/{id}`
    pub async fn update_room(&self, id: &str, payload: &RoomPayload) -> Result<RoomResponse, Error> {
        self.put(&format!("rooms/{id}"), payload).await
    }

    /// `DELETE /rooms/{id}`
    pub async fn delete_room(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("rooms/{id}")).await
    }
}
