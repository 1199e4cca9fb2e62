//! Booking command handlers.

use tabled::Tabled;

use frontdesk_core::{BackOffice, Booking, EntityId, EntityKind, FormField, ListRow, format};

use crate::cli::{BookingsArgs, BookingsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct BookingRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Guest")]
    guest: String,
    #[tabled(rename = "Room")]
    room: String,
    #[tabled(rename = "Check-in")]
    check_in: String,
    #[tabled(rename = "Check-out")]
    check_out: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&ListRow> for BookingRow {
    fn from(row: &ListRow) -> Self {
        Self {
            id: row.id.to_string(),
            guest: util::cell(row, 0),
            room: util::cell(row, 1),
            check_in: util::cell(row, 2),
            check_out: util::cell(row, 3),
            status: util::cell(row, 4),
        }
    }
}

fn detail(b: &Booking) -> String {
    let mut lines = vec![
        format!("ID:        {}", b.id),
        format!("Guest:     {}", b.guest_name()),
        format!("Room:      {}", b.room_label()),
        format!("Check-in:  {}", format::display_date(b.check_in)),
        format!("Check-out: {}", format::display_date(b.check_out)),
        format!("Nights:    {}", b.nights()),
        format!("Status:    {}", b.status),
    ];
    if let Some(total) = b.total_price {
        lines.push(format!("Total:     {}", format::currency(total)));
    }
    lines.join("\n")
}

fn print_booking(
    back_office: &BackOffice,
    id: &EntityId,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let out = match back_office.bookings().find(id) {
        Some(booking) => {
            output::render_single(&global.output, booking, detail, |b| b.id.to_string())?
        }
        None => id.to_string(),
    };
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Copy the provided fields into the open booking form.
fn fill(back_office: &mut BackOffice, fields: [(FormField, Option<String>); 5]) {
    let form = back_office.booking_form_mut();
    for (field, value) in fields {
        if let Some(value) = value {
            form.set(field, value);
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    back_office: &mut BackOffice,
    args: BookingsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        BookingsCommand::List {
            today,
            upcoming,
            search,
        } => {
            let spin = util::spinner(global, "Loading bookings");
            let loaded = back_office.load_bookings().await;
            spin.finish_and_clear();
            loaded?;

            if today {
                back_office.filter_bookings_today();
            } else if upcoming {
                back_office.filter_upcoming_bookings();
            } else if let Some(term) = search {
                back_office.search(EntityKind::Booking, &term);
            }
            util::print_list(back_office.bookings(), global, |row| BookingRow::from(row))
        }

        BookingsCommand::Add {
            guest,
            room,
            check_in,
            check_out,
            status,
        } => {
            back_office.open_booking_form().await;
            fill(
                back_office,
                [
                    (FormField::BookingGuest, Some(guest)),
                    (FormField::BookingRoom, Some(room)),
                    (FormField::CheckIn, check_in),
                    (FormField::CheckOut, check_out),
                    (FormField::BookingStatus, status),
                ],
            );

            let id = back_office.submit_booking_form().await?;
            print_booking(back_office, &id, global)
        }

        BookingsCommand::Edit {
            id,
            guest,
            room,
            check_in,
            check_out,
            status,
        } => {
            let id = EntityId::from(id);
            back_office.edit_booking(&id).await?;
            fill(
                back_office,
                [
                    (FormField::BookingGuest, guest),
                    (FormField::BookingRoom, room),
                    (FormField::CheckIn, check_in),
                    (FormField::CheckOut, check_out),
                    (FormField::BookingStatus, status),
                ],
            );

            let id = back_office.submit_booking_form().await?;
            print_booking(back_office, &id, global)
        }

        BookingsCommand::Delete { id } => {
            super::delete(back_office, EntityKind::Booking, id, global).await
        }

        BookingsCommand::CheckIn { id } => {
            let id = EntityId::from(id);
            back_office.check_in(&id).await?;
            print_booking(back_office, &id, global)
        }

        BookingsCommand::CheckOut { id } => {
            let id = EntityId::from(id);
            back_office.check_out(&id).await?;
            print_booking(back_office, &id, global)
        }
    }
}
