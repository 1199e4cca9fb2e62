// ── Form controller ──
//
// One state machine per entity kind: closed, or open in add/edit mode.
// Field values are kept as raw text exactly as typed; `submit` validates
// them into a typed request. A rejected submission keeps the form open
// with its field errors; nothing is sent until validation passes.

use std::marker::PhantomData;

use chrono::{Days, NaiveDate};

use crate::error::CoreError;
use crate::format;
use crate::list::Listed;
use crate::model::{Booking, BookingStatus, EntityId, EntityKind, Guest, Room, RoomStatus};
use crate::requests::{BookingRequest, GuestRequest, RoomRequest};
use crate::validate::{self, FormField, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(EntityId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Closed,
    Open(FormMode),
}

/// What a successful submission asks the API to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<R> {
    Create(R),
    Update(EntityId, R),
}

/// Raw field text, in the form's field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues(Vec<(FormField, String)>);

impl FieldValues {
    fn new(fields: &[FormField], values: Vec<String>) -> Self {
        let mut values = values.into_iter();
        Self(
            fields
                .iter()
                .map(|f| (*f, values.next().unwrap_or_default()))
                .collect(),
        )
    }

    pub fn get(&self, field: FormField) -> &str {
        self.0
            .iter()
            .find(|(f, _)| *f == field)
            .map_or("", |(_, v)| v.as_str())
    }

    fn set(&mut self, field: FormField, value: String) -> bool {
        match self.0.iter_mut().find(|(f, _)| *f == field) {
            Some((_, slot)) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

/// Inputs to validation besides the field text.
#[derive(Debug, Clone, Copy)]
pub struct FormContext<'a> {
    pub mode: &'a FormMode,
    pub today: NaiveDate,
}

/// Per-kind form behavior.
pub trait FormSpec {
    type Entity: Listed;
    type Request;

    const KIND: EntityKind;
    const FIELDS: &'static [FormField];

    /// Field text for add mode, aligned with `FIELDS`.
    fn defaults(today: NaiveDate) -> Vec<String>;

    /// Field text pre-filled from an entity in edit mode.
    fn values_of(entity: &Self::Entity) -> Vec<String>;

    fn parse(values: &FieldValues, ctx: FormContext<'_>) -> Result<Self::Request, CoreError>;
}

#[derive(Debug, Clone)]
pub struct Form<S: FormSpec> {
    state: FormState,
    values: FieldValues,
    errors: ValidationErrors,
    min_check_in: Option<NaiveDate>,
    spec: PhantomData<S>,
}

impl<S: FormSpec> Default for Form<S> {
    fn default() -> Self {
        Self {
            state: FormState::Closed,
            values: FieldValues::new(S::FIELDS, Vec::new()),
            errors: ValidationErrors::default(),
            min_check_in: None,
            spec: PhantomData,
        }
    }
}

impl<S: FormSpec> Form<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open empty, seeded with the add-mode defaults.
    pub fn open_add(&mut self, today: NaiveDate) {
        self.state = FormState::Open(FormMode::Add);
        self.values = FieldValues::new(S::FIELDS, S::defaults(today));
        self.errors = ValidationErrors::default();
        self.min_check_in = (S::KIND == EntityKind::Booking).then_some(today);
    }

    /// Open pre-filled from `entity`.
    pub fn open_edit(&mut self, entity: &S::Entity) {
        self.state = FormState::Open(FormMode::Edit(entity.id().clone()));
        self.values = FieldValues::new(S::FIELDS, S::values_of(entity));
        self.errors = ValidationErrors::default();
        self.min_check_in = None;
    }

    /// Close and reset every field.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> bool {
        self.values.set(field, value.into())
    }

    /// Validate the current fields.
    ///
    /// Field failures are kept on the form for display. The form stays open
    /// either way; the caller closes it once the API accepts the request.
    pub fn submit(&mut self, today: NaiveDate) -> Result<Submission<S::Request>, CoreError> {
        let FormState::Open(mode) = &self.state else {
            return Err(CoreError::FormClosed { kind: S::KIND });
        };

        let ctx = FormContext { mode, today };
        match S::parse(&self.values, ctx) {
            Ok(request) => {
                self.errors = ValidationErrors::default();
                Ok(match mode {
                    FormMode::Add => Submission::Create(request),
                    FormMode::Edit(id) => Submission::Update(id.clone(), request),
                })
            }
            Err(CoreError::ValidationFailed { errors }) => {
                self.errors = errors.clone();
                Err(CoreError::ValidationFailed { errors })
            }
            Err(other) => {
                self.errors = ValidationErrors::default();
                Err(other)
            }
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::Open(_))
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Id of the entity being edited.
    pub fn editing(&self) -> Option<&EntityId> {
        match &self.state {
            FormState::Open(FormMode::Edit(id)) => Some(id),
            _ => None,
        }
    }

    pub fn fields(&self) -> &'static [FormField] {
        S::FIELDS
    }

    pub fn value(&self, field: FormField) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Earliest selectable check-in (booking add mode only).
    pub fn min_check_in(&self) -> Option<NaiveDate> {
        self.min_check_in
    }
}

// ── Rooms ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct RoomFormSpec;

impl FormSpec for RoomFormSpec {
    type Entity = Room;
    type Request = RoomRequest;

    const KIND: EntityKind = EntityKind::Room;
    const FIELDS: &'static [FormField] = &[
        FormField::RoomNumber,
        FormField::RoomType,
        FormField::RoomPrice,
        FormField::RoomStatus,
    ];

    fn defaults(_today: NaiveDate) -> Vec<String> {
        vec![
            String::new(),
            String::new(),
            String::new(),
            RoomStatus::Available.to_string(),
        ]
    }

    fn values_of(room: &Room) -> Vec<String> {
        vec![
            room.number.to_string(),
            room.room_type.to_string(),
            room.price.to_string(),
            room.status.to_string(),
        ]
    }

    fn parse(values: &FieldValues, _ctx: FormContext<'_>) -> Result<RoomRequest, CoreError> {
        let mut errors = ValidationErrors::default();

        let number = validate::parse_room_number(values.get(FormField::RoomNumber));
        if number.is_none() {
            errors.push(FormField::RoomNumber, "Please enter a valid room number");
        }
        let room_type = validate::required(values.get(FormField::RoomType));
        if room_type.is_none() {
            errors.push(FormField::RoomType, "Please select a room type");
        }
        let price = validate::parse_price(values.get(FormField::RoomPrice));
        if price.is_none() {
            errors.push(FormField::RoomPrice, "Please enter a valid price");
        }
        let status = validate::required(values.get(FormField::RoomStatus))
            .map_or(RoomStatus::Available, RoomStatus::from);

        match (number, room_type, price) {
            (Some(number), Some(room_type), Some(price)) => Ok(RoomRequest {
                number,
                room_type: room_type.into(),
                price,
                status,
            }),
            _ => Err(CoreError::ValidationFailed { errors }),
        }
    }
}

// ── Guests ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct GuestFormSpec;

impl FormSpec for GuestFormSpec {
    type Entity = Guest;
    type Request = GuestRequest;

    const KIND: EntityKind = EntityKind::Guest;
    const FIELDS: &'static [FormField] = &[
        FormField::GuestName,
        FormField::GuestEmail,
        FormField::GuestPhone,
    ];

    fn defaults(_today: NaiveDate) -> Vec<String> {
        vec![String::new(); 3]
    }

    fn values_of(guest: &Guest) -> Vec<String> {
        vec![
            guest.name.clone(),
            guest.email.clone(),
            guest.phone.clone(),
        ]
    }

    fn parse(values: &FieldValues, _ctx: FormContext<'_>) -> Result<GuestRequest, CoreError> {
        let mut errors = ValidationErrors::default();

        let name = validate::required(values.get(FormField::GuestName));
        if name.is_none() {
            errors.push(FormField::GuestName, "Please enter guest name");
        }
        let email = values.get(FormField::GuestEmail).trim();
        if !validate::is_valid_email(email) {
            errors.push(FormField::GuestEmail, "Please enter a valid email address");
        }
        let phone = validate::required(values.get(FormField::GuestPhone));
        if phone.is_none() {
            errors.push(FormField::GuestPhone, "Please enter phone number");
        }

        match (name, phone) {
            (Some(name), Some(phone)) if errors.is_empty() => Ok(GuestRequest {
                name: name.to_owned(),
                email: email.to_owned(),
                phone: phone.to_owned(),
            }),
            _ => Err(CoreError::ValidationFailed { errors }),
        }
    }
}

// ── Bookings ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct BookingFormSpec;

impl FormSpec for BookingFormSpec {
    type Entity = Booking;
    type Request = BookingRequest;

    const KIND: EntityKind = EntityKind::Booking;
    const FIELDS: &'static [FormField] = &[
        FormField::BookingGuest,
        FormField::BookingRoom,
        FormField::CheckIn,
        FormField::CheckOut,
        FormField::BookingStatus,
    ];

    /// Today through tomorrow, status `booked`.
    fn defaults(today: NaiveDate) -> Vec<String> {
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
        vec![
            String::new(),
            String::new(),
            format::input_date(today),
            format::input_date(tomorrow),
            BookingStatus::Booked.to_string(),
        ]
    }

    fn values_of(booking: &Booking) -> Vec<String> {
        vec![
            booking.guest_id().map(ToString::to_string).unwrap_or_default(),
            booking.room_id().map(ToString::to_string).unwrap_or_default(),
            format::input_date(booking.check_in),
            format::input_date(booking.check_out),
            booking.status.to_string(),
        ]
    }

    fn parse(values: &FieldValues, ctx: FormContext<'_>) -> Result<BookingRequest, CoreError> {
        let mut errors = ValidationErrors::default();

        let guest = validate::required(values.get(FormField::BookingGuest));
        if guest.is_none() {
            errors.push(FormField::BookingGuest, "Please select a guest");
        }
        let room = validate::required(values.get(FormField::BookingRoom));
        if room.is_none() {
            errors.push(FormField::BookingRoom, "Please select a room");
        }
        let check_in = format::parse_input_date(values.get(FormField::CheckIn));
        match check_in {
            None => errors.push(FormField::CheckIn, "Please enter a valid check-in date"),
            Some(date) if *ctx.mode == FormMode::Add && date < ctx.today => {
                errors.push(FormField::CheckIn, "Check-in date cannot be in the past");
            }
            Some(_) => {}
        }
        let check_out = format::parse_input_date(values.get(FormField::CheckOut));
        if check_out.is_none() {
            errors.push(FormField::CheckOut, "Please enter a valid check-out date");
        }
        // the stay is judged before the other fields
        if let (Some(check_in), Some(check_out)) = (check_in, check_out) {
            validate::validate_stay(check_in, check_out)?;
        }
        let status = validate::required(values.get(FormField::BookingStatus))
            .map_or(BookingStatus::Booked, BookingStatus::from);

        match (guest, room, check_in, check_out) {
            (Some(guest), Some(room), Some(check_in), Some(check_out)) if errors.is_empty() => {
                Ok(BookingRequest {
                    guest_id: EntityId::from(guest),
                    room_id: EntityId::from(room),
                    check_in,
                    check_out,
                    status,
                })
            }
            _ => Err(CoreError::ValidationFailed { errors }),
        }
    }
}

pub type RoomForm = Form<RoomFormSpec>;
pub type GuestForm = Form<GuestFormSpec>;
pub type BookingForm = Form<BookingFormSpec>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{GuestRef, RoomRef, RoomType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 3, 10)
    }

    #[test]
    fn closed_form_rejects_submit() {
        let mut form = RoomForm::new();
        assert!(!form.is_open());
        assert!(matches!(
            form.submit(today()),
            Err(CoreError::FormClosed {
                kind: EntityKind::Room
            })
        ));
    }

    #[test]
    fn room_add_then_submit_creates() {
        let mut form = RoomForm::new();
        form.open_add(today());
        assert_eq!(form.value(FormField::RoomStatus), "available");

        form.set(FormField::RoomNumber, "101");
        form.set(FormField::RoomType, "deluxe");
        form.set(FormField::RoomPrice, "150");

        let Submission::Create(req) = form.submit(today()).unwrap() else {
            panic!("expected create");
        };
        assert_eq!(req.number, 101);
        assert_eq!(req.room_type, RoomType::Deluxe);
        assert_eq!(req.status, RoomStatus::Available);
        assert!(form.is_open(), "form closes only after the API accepts");
    }

    #[test]
    fn room_field_errors_block_submission() {
        let mut form = RoomForm::new();
        form.open_add(today());
        form.set(FormField::RoomNumber, "0");
        form.set(FormField::RoomPrice, "-5");

        let err = form.submit(today()).unwrap_err();
        assert!(matches!(err, CoreError::ValidationFailed { ref errors } if errors.len() == 3));
        assert_eq!(
            form.error(FormField::RoomNumber),
            Some("Please enter a valid room number")
        );
        assert_eq!(form.error(FormField::RoomType), Some("Please select a room type"));
        assert_eq!(form.error(FormField::RoomPrice), Some("Please enter a valid price"));

        // fixing the input clears the marks
        form.set(FormField::RoomNumber, "12");
        form.set(FormField::RoomType, "single");
        form.set(FormField::RoomPrice, "60");
        assert!(form.submit(today()).is_ok());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn edit_prefills_and_updates() {
        let room = Room {
            id: EntityId::from("r1"),
            number: 101,
            room_type: RoomType::Suite,
            price: 320.5,
            status: RoomStatus::Maintenance,
        };
        let mut form = RoomForm::new();
        form.open_edit(&room);
        assert_eq!(form.editing().unwrap().as_str(), "r1");
        assert_eq!(form.value(FormField::RoomNumber), "101");
        assert_eq!(form.value(FormField::RoomType), "suite");
        assert_eq!(form.value(FormField::RoomPrice), "320.5");
        assert_eq!(form.value(FormField::RoomStatus), "maintenance");

        let Submission::Update(id, req) = form.submit(today()).unwrap() else {
            panic!("expected update");
        };
        assert_eq!(id.as_str(), "r1");
        assert_eq!(req, RoomRequest::from(&room));
    }

    #[test]
    fn close_resets_fields_and_errors() {
        let mut form = GuestForm::new();
        form.open_add(today());
        form.set(FormField::GuestName, "Ada");
        let _ = form.submit(today());
        assert!(!form.errors().is_empty());

        form.close();
        assert!(!form.is_open());
        assert_eq!(form.value(FormField::GuestName), "");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn guest_fields_are_trimmed_and_email_checked() {
        let mut form = GuestForm::new();
        form.open_add(today());
        form.set(FormField::GuestName, "  Ada Lovelace ");
        form.set(FormField::GuestEmail, " ada@example ");
        form.set(FormField::GuestPhone, "555-0100");

        assert!(form.submit(today()).is_err());
        assert_eq!(
            form.error(FormField::GuestEmail),
            Some("Please enter a valid email address")
        );
        assert!(form.error(FormField::GuestName).is_none());

        form.set(FormField::GuestEmail, " ada@example.com ");
        let Submission::Create(req) = form.submit(today()).unwrap() else {
            panic!("expected create");
        };
        assert_eq!(req.name, "Ada Lovelace");
        assert_eq!(req.email, "ada@example.com");
    }

    #[test]
    fn booking_add_defaults_to_today_and_tomorrow() {
        let mut form = BookingForm::new();
        form.open_add(today());
        assert_eq!(form.value(FormField::CheckIn), "2026-03-10");
        assert_eq!(form.value(FormField::CheckOut), "2026-03-11");
        assert_eq!(form.value(FormField::BookingStatus), "booked");
        assert_eq!(form.min_check_in(), Some(today()));
    }

    #[test]
    fn booking_equal_dates_are_a_stay_error_not_a_field_error() {
        let mut form = BookingForm::new();
        form.open_add(today());
        form.set(FormField::BookingGuest, "g1");
        form.set(FormField::BookingRoom, "r1");
        form.set(FormField::CheckOut, "2026-03-10");

        assert!(matches!(form.submit(today()), Err(CoreError::InvalidStay)));
        assert!(form.errors().is_empty());
        assert!(form.is_open());
    }

    #[test]
    fn booking_stay_is_checked_before_missing_fields() {
        let mut form = BookingForm::new();
        form.open_add(today());
        form.set(FormField::CheckOut, "2026-03-10");

        assert!(matches!(form.submit(today()), Err(CoreError::InvalidStay)));
        assert!(form.errors().is_empty());

        form.set(FormField::CheckOut, "2026-03-12");
        let Err(CoreError::ValidationFailed { errors }) = form.submit(today()) else {
            panic!("expected field errors");
        };
        assert_eq!(
            errors.get(FormField::BookingGuest),
            Some("Please select a guest")
        );
    }

    #[test]
    fn booking_add_rejects_past_check_in() {
        let mut form = BookingForm::new();
        form.open_add(today());
        form.set(FormField::BookingGuest, "g1");
        form.set(FormField::BookingRoom, "r1");
        form.set(FormField::CheckIn, "2026-03-01");

        assert!(form.submit(today()).is_err());
        assert_eq!(
            form.error(FormField::CheckIn),
            Some("Check-in date cannot be in the past")
        );
    }

    #[test]
    fn booking_edit_allows_past_check_in() {
        let booking = Booking {
            id: EntityId::from("b1"),
            guest: Some(GuestRef {
                id: EntityId::from("g1"),
                name: None,
                email: None,
            }),
            room: Some(RoomRef {
                id: EntityId::from("r1"),
                number: None,
                price: None,
                room_type: None,
            }),
            check_in: date(2026, 3, 1),
            check_out: date(2026, 3, 4),
            status: BookingStatus::CheckedIn,
            total_price: None,
        };
        let mut form = BookingForm::new();
        form.open_edit(&booking);
        assert!(form.min_check_in().is_none());
        assert_eq!(form.value(FormField::BookingGuest), "g1");

        let Submission::Update(id, req) = form.submit(today()).unwrap() else {
            panic!("expected update");
        };
        assert_eq!(id.as_str(), "b1");
        assert_eq!(req.status, BookingStatus::CheckedIn);
        assert_eq!(req.check_in, date(2026, 3, 1));
    }

    #[test]
    fn booking_requires_guest_and_room() {
        let mut form = BookingForm::new();
        form.open_add(today());
        let err = form.submit(today()).unwrap_err();
        assert!(matches!(err, CoreError::ValidationFailed { ref errors } if errors.len() == 2));
        assert_eq!(form.error(FormField::BookingGuest), Some("Please select a guest"));
        assert_eq!(form.error(FormField::BookingRoom), Some("Please select a room"));
    }

    #[test]
    fn unknown_field_is_not_set() {
        let mut form = GuestForm::new();
        form.open_add(today());
        assert!(!form.set(FormField::RoomNumber, "1"));
    }
}
