//! Room command handlers.

use tabled::Tabled;

use frontdesk_core::{BackOffice, EntityId, EntityKind, FormField, ListRow, Room, format};

use crate::cli::{GlobalOpts, RoomsArgs, RoomsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct RoomRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Room #")]
    number: String,
    #[tabled(rename = "Type")]
    room_type: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&ListRow> for RoomRow {
    fn from(row: &ListRow) -> Self {
        Self {
            id: row.id.to_string(),
            number: util::cell(row, 0),
            room_type: util::cell(row, 1),
            price: util::cell(row, 2),
            status: util::cell(row, 3),
        }
    }
}

fn detail(r: &Room) -> String {
    [
        format!("ID:     {}", r.id),
        format!("Number: {}", r.number),
        format!("Type:   {}", r.room_type.label()),
        format!("Price:  {} / night", format::currency(r.price)),
        format!("Status: {}", r.status),
    ]
    .join("\n")
}

fn print_room(back_office: &BackOffice, id: &EntityId, global: &GlobalOpts) -> Result<(), CliError> {
    let out = match back_office.rooms().find(id) {
        Some(room) => output::render_single(&global.output, room, detail, |r| r.id.to_string())?,
        None => id.to_string(),
    };
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    back_office: &mut BackOffice,
    args: RoomsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        RoomsCommand::List { available, search } => {
            let spin = util::spinner(global, "Loading rooms");
            let loaded = back_office.load_rooms().await;
            spin.finish_and_clear();
            loaded?;

            if available {
                back_office.filter_available_rooms();
            } else if let Some(term) = search {
                back_office.search(EntityKind::Room, &term);
            }
            util::print_list(back_office.rooms(), global, |row| RoomRow::from(row))
        }

        RoomsCommand::Add {
            number,
            room_type,
            price,
            status,
        } => {
            back_office.open_room_form();
            let form = back_office.room_form_mut();
            form.set(FormField::RoomNumber, number);
            form.set(FormField::RoomType, room_type);
            form.set(FormField::RoomPrice, price);
            if let Some(status) = status {
                form.set(FormField::RoomStatus, status);
            }

            let id = back_office.submit_room_form().await?;
            print_room(back_office, &id, global)
        }

        RoomsCommand::Edit {
            id,
            number,
            room_type,
            price,
            status,
        } => {
            let id = EntityId::from(id);
            back_office.edit_room(&id).await?;

            let form = back_office.room_form_mut();
            for (field, value) in [
                (FormField::RoomNumber, number),
                (FormField::RoomType, room_type),
                (FormField::RoomPrice, price),
                (FormField::RoomStatus, status),
            ] {
                if let Some(value) = value {
                    form.set(field, value);
                }
            }

            let id = back_office.submit_room_form().await?;
            print_room(back_office, &id, global)
        }

        RoomsCommand::Delete { id } => {
            super::delete(back_office, EntityKind::Room, id, global).await
        }
    }
}
