//! Guest command handlers.

use tabled::Tabled;

use frontdesk_core::{BackOffice, EntityId, EntityKind, FormField, Guest, ListRow};

use crate::cli::{GlobalOpts, GuestsArgs, GuestsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct GuestRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Bookings")]
    bookings: String,
}

impl From<&ListRow> for GuestRow {
    fn from(row: &ListRow) -> Self {
        Self {
            id: row.id.to_string(),
            name: util::cell(row, 0),
            email: util::cell(row, 1),
            phone: util::cell(row, 2),
            bookings: util::cell(row, 3),
        }
    }
}

fn detail(g: &Guest) -> String {
    [
        format!("ID:    {}", g.id),
        format!("Name:  {}", g.name),
        format!("Email: {}", g.email),
        format!("Phone: {}", g.phone),
    ]
    .join("\n")
}

fn print_guest(
    back_office: &BackOffice,
    id: &EntityId,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let out = match back_office.guests().find(id) {
        Some(guest) => output::render_single(&global.output, guest, detail, |g| g.id.to_string())?,
        None => id.to_string(),
    };
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    back_office: &mut BackOffice,
    args: GuestsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        GuestsCommand::List { search } => {
            let spin = util::spinner(global, "Loading guests");
            // booking counts come from the bookings list
            let loaded = match back_office.load_bookings().await {
                Ok(()) => back_office.load_guests().await,
                Err(e) => Err(e),
            };
            spin.finish_and_clear();
            loaded?;

            if let Some(term) = search {
                back_office.search(EntityKind::Guest, &term);
            }
            util::print_list(back_office.guests(), global, |row| GuestRow::from(row))
        }

        GuestsCommand::Add { name, email, phone } => {
            back_office.open_guest_form();
            let form = back_office.guest_form_mut();
            form.set(FormField::GuestName, name);
            form.set(FormField::GuestEmail, email);
            form.set(FormField::GuestPhone, phone);

            let id = back_office.submit_guest_form().await?;
            print_guest(back_office, &id, global)
        }

        GuestsCommand::Edit {
            id,
            name,
            email,
            phone,
        } => {
            let id = EntityId::from(id);
            back_office.edit_guest(&id).await?;

            let form = back_office.guest_form_mut();
            for (field, value) in [
                (FormField::GuestName, name),
                (FormField::GuestEmail, email),
                (FormField::GuestPhone, phone),
            ] {
                if let Some(value) = value {
                    form.set(field, value);
                }
            }

            let id = back_office.submit_guest_form().await?;
            print_guest(back_office, &id, global)
        }

        GuestsCommand::Delete { id } => {
            super::delete(back_office, EntityKind::Guest, id, global).await
        }
    }
}
