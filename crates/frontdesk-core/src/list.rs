// ── Entity list controller ──
//
// Holds one fetched collection and its rendered rows. Row visibility is
// reduced either by a free-text search over the rendered row text or by a
// kind-specific status filter. Reductions replace each other: applying one
// recomputes every row from scratch, and a reload clears it.

use std::convert::Infallible;
use std::fmt::Debug;

use chrono::NaiveDate;

use crate::format;
use crate::model::{Booking, EmptyState, EntityId, EntityKind, Guest, Room};

/// An entity type that can be shown in an `EntityList`.
pub trait Listed {
    /// Status reduction offered for this kind.
    type Filter: Copy + PartialEq + Debug;

    const KIND: EntityKind;

    fn id(&self) -> &EntityId;

    fn matches(&self, filter: Self::Filter, today: NaiveDate) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomFilter {
    AvailableOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingFilter {
    /// Check-in date is today.
    Today,
    /// Check-in date is after today.
    Upcoming,
}

impl Listed for Room {
    type Filter = RoomFilter;
    const KIND: EntityKind = EntityKind::Room;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn matches(&self, filter: RoomFilter, _today: NaiveDate) -> bool {
        match filter {
            RoomFilter::AvailableOnly => self.is_available(),
        }
    }
}

impl Listed for Guest {
    type Filter = Infallible;
    const KIND: EntityKind = EntityKind::Guest;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn matches(&self, filter: Infallible, _today: NaiveDate) -> bool {
        match filter {}
    }
}

impl Listed for Booking {
    type Filter = BookingFilter;
    const KIND: EntityKind = EntityKind::Booking;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn matches(&self, filter: BookingFilter, today: NaiveDate) -> bool {
        match filter {
            BookingFilter::Today => self.check_in == today,
            BookingFilter::Upcoming => self.check_in > today,
        }
    }
}

// ── Row rendering ───────────────────────────────────────────────────

pub fn room_cells(room: &Room) -> Vec<String> {
    vec![
        room.number.to_string(),
        room.room_type.label().to_owned(),
        format::currency(room.price),
        room.status.to_string(),
    ]
}

pub fn guest_cells(guest: &Guest, bookings: usize) -> Vec<String> {
    let count = if bookings == 1 {
        "1 booking".to_owned()
    } else {
        format!("{bookings} bookings")
    };
    vec![
        guest.name.clone(),
        guest.email.clone(),
        guest.phone.clone(),
        count,
    ]
}

pub fn booking_cells(booking: &Booking) -> Vec<String> {
    vec![
        booking.guest_name().to_owned(),
        booking.room_label(),
        format::display_date(booking.check_in),
        format::display_date(booking.check_out),
        booking.status.to_string(),
    ]
}

// ── List state ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: EntityId,
    pub cells: Vec<String>,
    /// Lowercased row text the search runs against.
    text: String,
    pub visible: bool,
}

impl ListRow {
    fn new(id: EntityId, cells: Vec<String>) -> Self {
        let text = cells.join(" ").to_lowercase();
        Self {
            id,
            cells,
            text,
            visible: true,
        }
    }
}

/// Active row reduction.
#[derive(Debug, Clone, PartialEq)]
pub enum RowFilter<F> {
    All,
    /// Case-insensitive substring, stored lowercased.
    Search(String),
    Status { filter: F, today: NaiveDate },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct EntityList<T: Listed> {
    items: Vec<T>,
    rows: Vec<ListRow>,
    filter: RowFilter<T::Filter>,
    state: LoadState,
}

impl<T: Listed> Default for EntityList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            rows: Vec::new(),
            filter: RowFilter::All,
            state: LoadState::Idle,
        }
    }
}

impl<T: Listed> EntityList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection after a fetch. Every row is re-rendered and
    /// any reduction is cleared.
    pub fn replace(&mut self, items: Vec<T>, render: impl Fn(&T) -> Vec<String>) {
        self.rows = items
            .iter()
            .map(|item| ListRow::new(item.id().clone(), render(item)))
            .collect();
        self.items = items;
        self.filter = RowFilter::All;
        self.state = LoadState::Loaded;
    }

    /// Record a failed fetch. The previous rows are dropped.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.items.clear();
        self.rows.clear();
        self.filter = RowFilter::All;
        self.state = LoadState::Failed(message.into());
    }

    /// Re-render rows in place, keeping the active reduction.
    pub fn rerender(&mut self, render: impl Fn(&T) -> Vec<String>) {
        self.rows = self
            .items
            .iter()
            .map(|item| ListRow::new(item.id().clone(), render(item)))
            .collect();
        self.apply();
    }

    /// Show rows whose text contains `term`, ignoring case. Returns the
    /// visible count.
    pub fn search(&mut self, term: &str) -> usize {
        let term = term.trim();
        self.filter = if term.is_empty() {
            RowFilter::All
        } else {
            RowFilter::Search(term.to_lowercase())
        };
        self.apply()
    }

    /// Show rows matching `filter`. Returns the visible count.
    pub fn filter_status(&mut self, filter: T::Filter, today: NaiveDate) -> usize {
        self.filter = RowFilter::Status { filter, today };
        self.apply()
    }

    pub fn clear_filter(&mut self) -> usize {
        self.filter = RowFilter::All;
        self.apply()
    }

    fn apply(&mut self) -> usize {
        let mut visible = 0;
        for (row, item) in self.rows.iter_mut().zip(&self.items) {
            row.visible = match &self.filter {
                RowFilter::All => true,
                RowFilter::Search(term) => row.text.contains(term.as_str()),
                RowFilter::Status { filter, today } => item.matches(*filter, *today),
            };
            if row.visible {
                visible += 1;
            }
        }
        visible
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    /// Visible rows paired with their entities.
    pub fn visible(&self) -> impl Iterator<Item = (&T, &ListRow)> {
        self.items.iter().zip(&self.rows).filter(|(_, row)| row.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|r| r.visible).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn filter(&self) -> &RowFilter<T::Filter> {
        &self.filter
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn find(&self, id: &EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// `Showing N items`, counting visible rows.
    pub fn summary(&self) -> String {
        format::summary(self.visible_count())
    }

    /// Call-to-action shown instead of an empty table.
    pub fn placeholder(&self) -> Option<EmptyState> {
        (self.state == LoadState::Loaded && self.items.is_empty())
            .then(|| T::KIND.empty_state())
    }

    /// `Error loading rooms: ...` after a failed fetch.
    pub fn error(&self) -> Option<String> {
        match &self.state {
            LoadState::Failed(msg) => Some(format!(
                "Error loading {}: {msg}",
                T::KIND.collection()
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{BookingStatus, GuestRef, RoomRef, RoomStatus, RoomType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn room(id: &str, number: i64, room_type: RoomType, status: RoomStatus) -> Room {
        Room {
            id: EntityId::from(id),
            number,
            room_type,
            price: 100.0,
            status,
        }
    }

    fn rooms() -> EntityList<Room> {
        let mut list = EntityList::new();
        list.replace(
            vec![
                room("r1", 101, RoomType::Single, RoomStatus::Available),
                room("r2", 102, RoomType::Deluxe, RoomStatus::Occupied),
                room("r3", 201, RoomType::Suite, RoomStatus::Available),
                room("r4", 202, RoomType::Double, RoomStatus::Maintenance),
            ],
            room_cells,
        );
        list
    }

    fn booking(id: &str, guest: &str, check_in: NaiveDate) -> Booking {
        Booking {
            id: EntityId::from(id),
            guest: Some(GuestRef {
                id: EntityId::from(format!("g-{id}")),
                name: Some(guest.into()),
                email: None,
            }),
            room: Some(RoomRef {
                id: EntityId::from("r1"),
                number: Some(101),
                price: Some(80.0),
                room_type: None,
            }),
            check_in,
            check_out: check_in + chrono::Days::new(2),
            status: BookingStatus::Booked,
            total_price: None,
        }
    }

    #[test]
    fn search_is_case_insensitive_over_rendered_text() {
        let mut list = rooms();
        assert_eq!(list.search("DELUXE"), 1);
        assert_eq!(list.visible().next().unwrap().0.number, 102);
        // label text, not the wire code
        assert_eq!(list.search("executive"), 1);
        assert_eq!(list.search("available"), 2);
        assert_eq!(list.search("$100.00"), 4);
        assert_eq!(list.summary(), "Showing 4 items");
    }

    #[test]
    fn empty_search_shows_everything() {
        let mut list = rooms();
        list.search("zzz");
        assert_eq!(list.visible_count(), 0);
        assert_eq!(list.search("   "), 4);
        assert_eq!(list.filter(), &RowFilter::All);
    }

    #[test]
    fn reductions_replace_each_other() {
        let mut list = rooms();
        let today = date(2026, 3, 1);

        assert_eq!(list.search("20"), 2);
        // status filter ignores the previous search
        assert_eq!(list.filter_status(RoomFilter::AvailableOnly, today), 2);
        let visible: Vec<i64> = list.visible().map(|(r, _)| r.number).collect();
        assert_eq!(visible, vec![101, 201]);

        // and search ignores the previous status filter
        assert_eq!(list.search("occupied"), 1);
        assert_eq!(list.visible().next().unwrap().0.number, 102);
    }

    #[test]
    fn reload_clears_reduction() {
        let mut list = rooms();
        list.search("deluxe");
        let items = list.items().to_vec();
        list.replace(items, room_cells);
        assert_eq!(list.filter(), &RowFilter::All);
        assert_eq!(list.visible_count(), 4);
    }

    #[test]
    fn booking_date_filters() {
        let today = date(2026, 3, 10);
        let mut list = EntityList::new();
        list.replace(
            vec![
                booking("past", "Ada", date(2026, 3, 1)),
                booking("today", "Grace", today),
                booking("soon", "Linus", date(2026, 3, 11)),
                booking("later", "Ken", date(2026, 4, 1)),
            ],
            booking_cells,
        );

        assert_eq!(list.filter_status(BookingFilter::Today, today), 1);
        assert_eq!(list.visible().next().unwrap().0.id.as_str(), "today");

        assert_eq!(list.filter_status(BookingFilter::Upcoming, today), 2);
        let ids: Vec<&str> = list.visible().map(|(b, _)| b.id.as_str()).collect();
        assert_eq!(ids, vec!["soon", "later"]);

        assert_eq!(list.clear_filter(), 4);
    }

    #[test]
    fn booking_rows_render_display_dates() {
        let b = booking("b1", "Ada", date(2026, 3, 1));
        assert_eq!(
            booking_cells(&b),
            vec!["Ada", "Room 101", "3/1/2026", "3/3/2026", "booked"]
        );
    }

    #[test]
    fn guest_rows_count_bookings() {
        let g = Guest {
            id: EntityId::from("507f1f77bcf86cd799439011"),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: "555".into(),
        };
        assert_eq!(guest_cells(&g, 1)[3], "1 booking");
        assert_eq!(guest_cells(&g, 0)[3], "0 bookings");
    }

    #[test]
    fn rerender_keeps_reduction() {
        let mut list = rooms();
        list.search("single");
        list.rerender(room_cells);
        assert_eq!(list.visible_count(), 1);
    }

    #[test]
    fn placeholder_only_for_loaded_empty_list() {
        let mut list: EntityList<Guest> = EntityList::new();
        assert!(list.placeholder().is_none());
        list.replace(Vec::new(), |g| guest_cells(g, 0));
        assert_eq!(list.placeholder().unwrap().action, "Add Guest");
        assert_eq!(list.summary(), "Showing 0 items");
    }

    #[test]
    fn failed_load_reports_error() {
        let mut list = rooms();
        list.fail("connection refused");
        assert!(list.is_empty());
        assert!(list.placeholder().is_none());
        assert_eq!(
            list.error().unwrap(),
            "Error loading rooms: connection refused"
        );
    }
}
