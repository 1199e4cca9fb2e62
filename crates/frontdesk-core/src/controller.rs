// ── Back-office facade ──
//
// Owns the API client and every piece of controller state: the three
// lists, the three forms, the delete modal, the toast stack, dropdown
// options, and the last dashboard figures. Handlers take `&mut self`, so
// a front end's event loop runs them one at a time.
//
// Every mutation is followed by a re-fetch of the affected collections;
// nothing is patched locally.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use frontdesk_api::HotelClient;
use frontdesk_api::types::{
    BookingPayload, BookingResponse, GuestPayload, GuestResponse, RoomPayload, RoomResponse,
};

use crate::config::BackOfficeConfig;
use crate::convert::bookings_from_api;
use crate::dashboard::DashboardSummary;
use crate::error::CoreError;
use crate::form::{BookingForm, GuestForm, RoomForm, Submission};
use crate::list::{
    BookingFilter, EntityList, RoomFilter, booking_cells, guest_cells, room_cells,
};
use crate::model::{Booking, BookingStatus, EntityId, EntityKind, Guest, Room};
use crate::notify::{DeleteConfirmation, Toasts};
use crate::format;
use crate::requests::BookingRequest;

type ApiResult<T> = Result<T, frontdesk_api::Error>;

// ── ConnectionState ──────────────────────────────────────────────

/// Backend reachability as last observed by the probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Unknown,
    Connected,
    Disconnected { reason: String },
}

/// One entry of a booking-form dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub id: EntityId,
    pub label: String,
}

/// Dropdown entries: every guest, labelled `Name (email)`.
pub fn guest_options(guests: &[Guest]) -> Vec<SelectOption> {
    guests
        .iter()
        .map(|g| SelectOption {
            id: g.id.clone(),
            label: g.option_label(),
        })
        .collect()
}

/// Dropdown entries: available rooms, plus `keep` (the room of the booking
/// being edited) even when it is no longer available.
pub fn room_options(rooms: &[Room], keep: Option<&EntityId>) -> Vec<SelectOption> {
    rooms
        .iter()
        .filter(|r| r.is_available() || keep == Some(&r.id))
        .map(|r| SelectOption {
            id: r.id.clone(),
            label: format::room_option_label(r),
        })
        .collect()
}

fn booking_counts(bookings: &[Booking]) -> HashMap<EntityId, usize> {
    let mut counts = HashMap::new();
    for id in bookings.iter().filter_map(Booking::guest_id) {
        *counts.entry(id.clone()).or_insert(0) += 1;
    }
    counts
}

// ── BackOffice ───────────────────────────────────────────────────

/// The single entry point used by the CLI and the TUI.
pub struct BackOffice {
    config: BackOfficeConfig,
    client: HotelClient,
    pinned_today: Option<NaiveDate>,
    connection: ConnectionState,

    rooms: EntityList<Room>,
    guests: EntityList<Guest>,
    bookings: EntityList<Booking>,

    room_form: RoomForm,
    guest_form: GuestForm,
    booking_form: BookingForm,

    delete: DeleteConfirmation,
    toasts: Toasts,

    guest_options: Vec<SelectOption>,
    room_options: Vec<SelectOption>,
    dashboard: DashboardSummary,
}

impl BackOffice {
    /// Build the HTTP client from `config`. Does not touch the network.
    pub fn new(config: BackOfficeConfig) -> Result<Self, CoreError> {
        let client = HotelClient::new(config.url.as_str(), &config.api_path, &config.transport())?;
        Ok(Self::with_client(config, client))
    }

    /// Use an already-built client.
    pub fn with_client(config: BackOfficeConfig, client: HotelClient) -> Self {
        let toasts = Toasts::new(config.toast_duration);
        Self {
            config,
            client,
            pinned_today: None,
            connection: ConnectionState::Unknown,
            rooms: EntityList::new(),
            guests: EntityList::new(),
            bookings: EntityList::new(),
            room_form: RoomForm::new(),
            guest_form: GuestForm::new(),
            booking_form: BookingForm::new(),
            delete: DeleteConfirmation::default(),
            toasts,
            guest_options: Vec::new(),
            room_options: Vec::new(),
            dashboard: DashboardSummary::default(),
        }
    }

    /// Fix the calendar day used for filters, defaults, and revenue.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.pinned_today = Some(today);
        self
    }

    /// Today's date (UTC) unless pinned.
    pub fn today(&self) -> NaiveDate {
        self.pinned_today
            .unwrap_or_else(|| Utc::now().date_naive())
    }

    // ── Connectivity ─────────────────────────────────────────────

    /// Probe the backend root and record the outcome.
    pub async fn check_connection(&mut self) -> Result<(), CoreError> {
        match self.client.probe().await {
            Ok(()) => {
                info!(url = %self.client.root_url(), "backend reachable");
                self.connection = ConnectionState::Connected;
                self.toasts.success("Connected to backend API");
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                warn!(error = %err, "backend probe failed");
                self.connection = ConnectionState::Disconnected {
                    reason: err.to_string(),
                };
                self.toasts.error(format!("Cannot connect to backend: {err}"));
                Err(err)
            }
        }
    }

    // ── Loading ──────────────────────────────────────────────────

    /// Fetch all three collections concurrently, then rebuild every list,
    /// both dropdowns, and the dashboard.
    ///
    /// Each collection succeeds or fails on its own; a single error toast
    /// is raised if any of them failed.
    pub async fn load_all(&mut self) -> Result<(), CoreError> {
        let (rooms, guests, bookings) = tokio::join!(
            self.client.list_rooms(),
            self.client.list_guests(),
            self.client.list_bookings()
        );

        let bookings = self.apply_bookings(bookings);
        let rooms = self.apply_rooms(rooms);
        let guests = self.apply_guests(guests);

        self.guest_options = guest_options(self.guests.items());
        self.room_options = room_options(self.rooms.items(), None);

        match (rooms, guests, bookings) {
            (Ok(()), Ok(()), Ok(())) => {
                self.dashboard = DashboardSummary::compute(
                    self.rooms.items(),
                    self.guests.items(),
                    self.bookings.items(),
                    self.today(),
                );
                info!(
                    rooms = self.rooms.len(),
                    guests = self.guests.len(),
                    bookings = self.bookings.len(),
                    "loaded back-office data"
                );
                Ok(())
            }
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                self.toasts.error("Error loading initial data");
                Err(e)
            }
        }
    }

    /// Re-run the combined load on request.
    pub async fn refresh(&mut self) -> Result<(), CoreError> {
        self.load_all().await?;
        self.toasts.success("Data refreshed successfully");
        Ok(())
    }

    pub async fn load_rooms(&mut self) -> Result<(), CoreError> {
        let result = self.client.list_rooms().await;
        self.apply_rooms(result)
    }

    pub async fn load_guests(&mut self) -> Result<(), CoreError> {
        let result = self.client.list_guests().await;
        self.apply_guests(result)
    }

    pub async fn load_bookings(&mut self) -> Result<(), CoreError> {
        let result = self.client.list_bookings().await;
        self.apply_bookings(result)
    }

    fn apply_rooms(&mut self, result: ApiResult<Vec<RoomResponse>>) -> Result<(), CoreError> {
        match result {
            Ok(raw) => {
                let rooms: Vec<Room> = raw.into_iter().map(Room::from).collect();
                debug!(count = rooms.len(), "rooms loaded");
                self.rooms.replace(rooms, room_cells);
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                warn!(error = %err, "failed to load rooms");
                self.rooms.fail(err.to_string());
                Err(err)
            }
        }
    }

    fn apply_guests(&mut self, result: ApiResult<Vec<GuestResponse>>) -> Result<(), CoreError> {
        match result {
            Ok(raw) => {
                let guests: Vec<Guest> = raw.into_iter().map(Guest::from).collect();
                debug!(count = guests.len(), "guests loaded");
                let counts = booking_counts(self.bookings.items());
                self.guests.replace(guests, |g| {
                    guest_cells(g, counts.get(&g.id).copied().unwrap_or(0))
                });
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                warn!(error = %err, "failed to load guests");
                self.guests.fail(err.to_string());
                Err(err)
            }
        }
    }

    fn apply_bookings(
        &mut self,
        result: ApiResult<Vec<BookingResponse>>,
    ) -> Result<(), CoreError> {
        match result {
            Ok(raw) => {
                let bookings = bookings_from_api(raw);
                debug!(count = bookings.len(), "bookings loaded");
                self.bookings.replace(bookings, booking_cells);
                self.rerender_guests();
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                warn!(error = %err, "failed to load bookings");
                self.bookings.fail(err.to_string());
                Err(err)
            }
        }
    }

    /// Guest rows show booking counts, which change with the bookings list.
    fn rerender_guests(&mut self) {
        let counts = booking_counts(self.bookings.items());
        self.guests
            .rerender(|g| guest_cells(g, counts.get(&g.id).copied().unwrap_or(0)));
    }

    // ── Dashboard ────────────────────────────────────────────────

    async fn fetch_dashboard(&self) -> Result<DashboardSummary, CoreError> {
        let (rooms, guests, bookings) = tokio::join!(
            self.client.list_rooms(),
            self.client.list_guests(),
            self.client.list_bookings()
        );
        let rooms: Vec<Room> = rooms?.into_iter().map(Room::from).collect();
        let guests: Vec<Guest> = guests?.into_iter().map(Guest::from).collect();
        let bookings = bookings_from_api(bookings?);
        Ok(DashboardSummary::compute(
            &rooms,
            &guests,
            &bookings,
            self.today(),
        ))
    }

    /// Recompute the dashboard from freshly fetched collections. On failure
    /// the previous figures stay.
    pub async fn refresh_dashboard(&mut self) -> Result<(), CoreError> {
        match self.fetch_dashboard().await {
            Ok(summary) => {
                self.dashboard = summary;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "failed to update dashboard");
                Err(e)
            }
        }
    }

    // ── Dropdowns ────────────────────────────────────────────────

    pub async fn refresh_guest_options(&mut self) -> Result<(), CoreError> {
        match self.client.list_guests().await {
            Ok(raw) => {
                let guests: Vec<Guest> = raw.into_iter().map(Guest::from).collect();
                self.guest_options = guest_options(&guests);
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                warn!(error = %err, "failed to load guests for dropdown");
                Err(err)
            }
        }
    }

    /// Rebuild the room dropdown. While a booking is being edited its
    /// current room stays selectable.
    pub async fn refresh_room_options(&mut self) -> Result<(), CoreError> {
        let keep = self.editing_booking_room();
        match self.client.list_rooms().await {
            Ok(raw) => {
                let rooms: Vec<Room> = raw.into_iter().map(Room::from).collect();
                self.room_options = room_options(&rooms, keep.as_ref());
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                warn!(error = %err, "failed to load rooms for dropdown");
                Err(err)
            }
        }
    }

    fn editing_booking_room(&self) -> Option<EntityId> {
        self.booking_form.editing()?;
        let room = self.booking_form.value(crate::validate::FormField::BookingRoom);
        (!room.is_empty()).then(|| EntityId::from(room))
    }

    /// Refresh both dropdowns. Failures are logged only.
    async fn refresh_options(&mut self) {
        let _ = self.refresh_guest_options().await;
        let _ = self.refresh_room_options().await;
    }

    // ── Search and filters ───────────────────────────────────────

    /// Free-text search over one list. Returns the visible count.
    pub fn search(&mut self, kind: EntityKind, term: &str) -> usize {
        match kind {
            EntityKind::Room => self.rooms.search(term),
            EntityKind::Guest => self.guests.search(term),
            EntityKind::Booking => self.bookings.search(term),
        }
    }

    pub fn clear_filter(&mut self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Room => self.rooms.clear_filter(),
            EntityKind::Guest => self.guests.clear_filter(),
            EntityKind::Booking => self.bookings.clear_filter(),
        }
    }

    pub fn filter_available_rooms(&mut self) -> usize {
        let count = self
            .rooms
            .filter_status(RoomFilter::AvailableOnly, self.today());
        self.toasts.info(format!("Showing {count} available rooms"));
        count
    }

    pub fn filter_bookings_today(&mut self) -> usize {
        let count = self
            .bookings
            .filter_status(BookingFilter::Today, self.today());
        self.toasts.info(format!("Showing {count} bookings for today"));
        count
    }

    pub fn filter_upcoming_bookings(&mut self) -> usize {
        let count = self
            .bookings
            .filter_status(BookingFilter::Upcoming, self.today());
        self.toasts.info(format!("Showing {count} upcoming bookings"));
        count
    }

    // ── Rooms ────────────────────────────────────────────────────

    pub fn open_room_form(&mut self) {
        let today = self.today();
        self.room_form.open_add(today);
    }

    /// Fetch the room collection, locate `id`, and open the form on it.
    pub async fn edit_room(&mut self, id: &EntityId) -> Result<(), CoreError> {
        let found = self
            .client
            .list_rooms()
            .await
            .map_err(CoreError::from)
            .and_then(|raw| {
                raw.into_iter()
                    .map(Room::from)
                    .find(|r| &r.id == id)
                    .ok_or_else(|| CoreError::NotFound {
                        kind: EntityKind::Room,
                        id: id.to_string(),
                    })
            });
        match found {
            Ok(room) => {
                self.room_form.open_edit(&room);
                Ok(())
            }
            Err(e) => {
                self.toasts.error(format!("Error fetching room: {e}"));
                Err(e)
            }
        }
    }

    /// Validate and send the room form. Returns the saved room's id.
    pub async fn submit_room_form(&mut self) -> Result<EntityId, CoreError> {
        let today = self.today();
        let result = self.room_form.submit(today);
        let submission = self.checked(EntityKind::Room, result)?;
        let (Submission::Create(request) | Submission::Update(_, request)) = &submission;
        let payload = RoomPayload::from(request);

        let (verb, result) = match &submission {
            Submission::Create(_) => ("create", self.client.create_room(&payload).await),
            Submission::Update(id, _) => (
                "update",
                self.client.update_room(id.as_str(), &payload).await,
            ),
        };
        let saved =
            self.finish_submit(EntityKind::Room, &submission, verb, result.map(|r| r.id))?;

        let _ = self.load_rooms().await;
        let _ = self.refresh_room_options().await;
        let _ = self.refresh_dashboard().await;
        Ok(saved)
    }

    // ── Guests ───────────────────────────────────────────────────

    pub fn open_guest_form(&mut self) {
        let today = self.today();
        self.guest_form.open_add(today);
    }

    pub async fn edit_guest(&mut self, id: &EntityId) -> Result<(), CoreError> {
        let found = self
            .client
            .list_guests()
            .await
            .map_err(CoreError::from)
            .and_then(|raw| {
                raw.into_iter()
                    .map(Guest::from)
                    .find(|g| &g.id == id)
                    .ok_or_else(|| CoreError::NotFound {
                        kind: EntityKind::Guest,
                        id: id.to_string(),
                    })
            });
        match found {
            Ok(guest) => {
                self.guest_form.open_edit(&guest);
                Ok(())
            }
            Err(e) => {
                self.toasts.error(format!("Error fetching guest: {e}"));
                Err(e)
            }
        }
    }

    pub async fn submit_guest_form(&mut self) -> Result<EntityId, CoreError> {
        let today = self.today();
        let result = self.guest_form.submit(today);
        let submission = self.checked(EntityKind::Guest, result)?;
        let (Submission::Create(request) | Submission::Update(_, request)) = &submission;
        let payload = GuestPayload::from(request);

        let (verb, result) = match &submission {
            Submission::Create(_) => ("create", self.client.create_guest(&payload).await),
            Submission::Update(id, _) => (
                "update",
                self.client.update_guest(id.as_str(), &payload).await,
            ),
        };
        let saved =
            self.finish_submit(EntityKind::Guest, &submission, verb, result.map(|g| g.id))?;

        let _ = self.load_guests().await;
        let _ = self.refresh_guest_options().await;
        let _ = self.refresh_dashboard().await;
        Ok(saved)
    }

    // ── Bookings ─────────────────────────────────────────────────

    /// Open an empty booking form with fresh guest and room dropdowns.
    pub async fn open_booking_form(&mut self) {
        let today = self.today();
        self.booking_form.open_add(today);
        self.refresh_options().await;
    }

    pub async fn edit_booking(&mut self, id: &EntityId) -> Result<(), CoreError> {
        let found = self.fetch_booking(id).await;
        match found {
            Ok(booking) => {
                self.booking_form.open_edit(&booking);
                self.refresh_options().await;
                Ok(())
            }
            Err(e) => {
                self.toasts.error(format!("Error fetching booking: {e}"));
                Err(e)
            }
        }
    }

    pub async fn submit_booking_form(&mut self) -> Result<EntityId, CoreError> {
        let today = self.today();
        let result = self.booking_form.submit(today);
        let submission = self.checked(EntityKind::Booking, result)?;
        let (Submission::Create(request) | Submission::Update(_, request)) = &submission;
        let payload = BookingPayload::from(request);

        let (verb, result) = match &submission {
            Submission::Create(_) => ("create", self.client.create_booking(&payload).await),
            Submission::Update(id, _) => (
                "update",
                self.client.update_booking(id.as_str(), &payload).await,
            ),
        };
        let saved =
            self.finish_submit(EntityKind::Booking, &submission, verb, result.map(|b| b.id))?;

        // the server may have changed the room's status
        let _ = self.load_bookings().await;
        let _ = self.load_rooms().await;
        let _ = self.refresh_room_options().await;
        let _ = self.refresh_dashboard().await;
        Ok(saved)
    }

    async fn fetch_booking(&self, id: &EntityId) -> Result<Booking, CoreError> {
        let raw = self.client.list_bookings().await?;
        bookings_from_api(raw)
            .into_iter()
            .find(|b| &b.id == id)
            .ok_or_else(|| CoreError::NotFound {
                kind: EntityKind::Booking,
                id: id.to_string(),
            })
    }

    /// Mark a booked stay as checked in.
    pub async fn check_in(&mut self, id: &EntityId) -> Result<(), CoreError> {
        self.transition(id, BookingStatus::CheckedIn, "in").await
    }

    /// Mark a checked-in stay as checked out.
    pub async fn check_out(&mut self, id: &EntityId) -> Result<(), CoreError> {
        self.transition(id, BookingStatus::CheckedOut, "out").await
    }

    async fn transition(
        &mut self,
        id: &EntityId,
        next: BookingStatus,
        direction: &str,
    ) -> Result<(), CoreError> {
        let result = self.send_transition(id, next.clone()).await;
        match result {
            Ok(()) => {
                info!(booking = %id, status = %next, "booking status changed");
                self.toasts
                    .success(format!("Guest checked {direction} successfully!"));
                let _ = self.load_bookings().await;
                let _ = self.load_rooms().await;
                let _ = self.refresh_dashboard().await;
                Ok(())
            }
            Err(e @ CoreError::InvalidTransition { .. }) => {
                self.toasts.warning(e.to_string());
                Err(e)
            }
            Err(e) => {
                self.toasts
                    .error(format!("Error checking {direction}: {e}"));
                Err(e)
            }
        }
    }

    async fn send_transition(&self, id: &EntityId, next: BookingStatus) -> Result<(), CoreError> {
        let booking = self.fetch_booking(id).await?;
        if !booking.status.can_transition_to(&next) {
            return Err(CoreError::InvalidTransition {
                from: booking.status,
                to: next,
            });
        }
        let request = BookingRequest::with_status(&booking, next).ok_or_else(|| {
            CoreError::Internal(format!("booking {id} has no guest or room"))
        })?;
        self.client
            .update_booking(id.as_str(), &BookingPayload::from(&request))
            .await?;
        Ok(())
    }

    // ── Form plumbing ────────────────────────────────────────────

    /// A stay error is also toasted; field errors stay on the form.
    fn checked<R>(
        &mut self,
        kind: EntityKind,
        result: Result<Submission<R>, CoreError>,
    ) -> Result<Submission<R>, CoreError> {
        match result {
            Err(e @ CoreError::InvalidStay) => {
                self.toasts.error(e.to_string());
                Err(e)
            }
            Err(e) => {
                debug!(%kind, error = %e, "form rejected");
                Err(e)
            }
            ok => ok,
        }
    }

    /// Toast the API outcome and close the form on success.
    fn finish_submit<R>(
        &mut self,
        kind: EntityKind,
        submission: &Submission<R>,
        verb: &str,
        result: ApiResult<String>,
    ) -> Result<EntityId, CoreError> {
        match result {
            Ok(id) => {
                info!(%kind, %id, "{verb}d");
                self.close_form(kind);
                self.toasts
                    .success(format!("{} {verb}d successfully!", kind.title()));
                Ok(EntityId::from(id))
            }
            Err(e) => {
                let err = match submission {
                    Submission::Update(id, _) => CoreError::from_api_for(e, kind, id),
                    Submission::Create(_) => CoreError::from(e),
                };
                self.toasts
                    .error(format!("Error: Failed to {verb} {kind}: {err}"));
                Err(err)
            }
        }
    }

    fn close_form(&mut self, kind: EntityKind) {
        match kind {
            EntityKind::Room => self.room_form.close(),
            EntityKind::Guest => self.guest_form.close(),
            EntityKind::Booking => self.booking_form.close(),
        }
    }

    /// Close every form and the delete modal.
    pub fn close_forms(&mut self) {
        self.room_form.close();
        self.guest_form.close();
        self.booking_form.close();
        self.delete.cancel();
    }

    // ── Delete confirmation ──────────────────────────────────────

    /// Open the modal for `id`, replacing any pending target.
    pub fn request_delete(&mut self, kind: EntityKind, id: EntityId) {
        self.delete.request(kind, id);
    }

    pub fn cancel_delete(&mut self) {
        self.delete.cancel();
    }

    /// Delete the pending target.
    ///
    /// `Ok(false)` without any request when nothing is pending. On failure
    /// the modal stays open with its target.
    pub async fn confirm_delete(&mut self) -> Result<bool, CoreError> {
        let Some(target) = self.delete.pending().cloned() else {
            return Ok(false);
        };

        let id = target.id.as_str();
        let result = match target.kind {
            EntityKind::Room => self.client.delete_room(id).await,
            EntityKind::Guest => self.client.delete_guest(id).await,
            EntityKind::Booking => self.client.delete_booking(id).await,
        };

        if let Err(e) = result {
            let err = CoreError::from_api_for(e, target.kind, &target.id);
            self.toasts
                .error(format!("Error deleting {}: {err}", target.kind));
            return Err(err);
        }

        info!(kind = %target.kind, id = %target.id, "deleted");
        self.toasts
            .success(format!("{} deleted successfully!", target.kind.title()));
        self.delete.cancel();

        match target.kind {
            EntityKind::Room => {
                let _ = self.load_rooms().await;
                let _ = self.refresh_room_options().await;
            }
            EntityKind::Guest => {
                // the guest's bookings go with it
                let _ = self.load_guests().await;
                let _ = self.load_bookings().await;
                let _ = self.refresh_guest_options().await;
            }
            EntityKind::Booking => {
                let _ = self.load_bookings().await;
                let _ = self.load_rooms().await;
                let _ = self.refresh_room_options().await;
            }
        }
        let _ = self.refresh_dashboard().await;
        Ok(true)
    }

    // ── Accessors ────────────────────────────────────────────────

    pub fn config(&self) -> &BackOfficeConfig {
        &self.config
    }

    pub fn client(&self) -> &HotelClient {
        &self.client
    }

    pub fn connection(&self) -> &ConnectionState {
        &self.connection
    }

    pub fn rooms(&self) -> &EntityList<Room> {
        &self.rooms
    }

    pub fn guests(&self) -> &EntityList<Guest> {
        &self.guests
    }

    pub fn bookings(&self) -> &EntityList<Booking> {
        &self.bookings
    }

    pub fn room_form(&self) -> &RoomForm {
        &self.room_form
    }

    pub fn room_form_mut(&mut self) -> &mut RoomForm {
        &mut self.room_form
    }

    pub fn guest_form(&self) -> &GuestForm {
        &self.guest_form
    }

    pub fn guest_form_mut(&mut self) -> &mut GuestForm {
        &mut self.guest_form
    }

    pub fn booking_form(&self) -> &BookingForm {
        &self.booking_form
    }

    pub fn booking_form_mut(&mut self) -> &mut BookingForm {
        &mut self.booking_form
    }

    pub fn delete_confirmation(&self) -> &DeleteConfirmation {
        &self.delete
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut Toasts {
        &mut self.toasts
    }

    pub fn dashboard(&self) -> &DashboardSummary {
        &self.dashboard
    }

    pub fn guest_option_list(&self) -> &[SelectOption] {
        &self.guest_options
    }

    pub fn room_option_list(&self) -> &[SelectOption] {
        &self.room_options
    }
}
