//! Command dispatch: bridges CLI args -> back office operations -> output.

pub mod bookings;
pub mod config_cmd;
pub mod dashboard;
pub mod guests;
pub mod rooms;
pub mod status;
pub mod util;

use frontdesk_core::{BackOffice, EntityId, EntityKind};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to its handler.
///
/// Toasts raised along the way are printed whether or not the command
/// succeeded.
pub async fn dispatch(
    cmd: Command,
    back_office: &mut BackOffice,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let result = match cmd {
        Command::Status => status::handle(back_office, global).await,
        Command::Dashboard => dashboard::handle(back_office, global).await,
        Command::Rooms(args) => rooms::handle(back_office, args, global).await,
        Command::Guests(args) => guests::handle(back_office, args, global).await,
        Command::Bookings(args) => bookings::handle(back_office, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    };
    util::flush_toasts(back_office, global);
    result
}

/// Confirm, then delete one entity of `kind`.
async fn delete(
    back_office: &mut BackOffice,
    kind: EntityKind,
    id: String,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let id = EntityId::from(id);
    back_office.request_delete(kind, id.clone());

    let message = format!("Delete {kind} {id}? {}", kind.delete_warning());
    let action = format!("{} delete", kind.collection());
    let confirmed = match util::confirm(&message, &action, global.yes) {
        Ok(confirmed) => confirmed,
        Err(e) => {
            back_office.cancel_delete();
            return Err(e);
        }
    };
    if !confirmed {
        back_office.cancel_delete();
        return Ok(());
    }

    back_office.confirm_delete().await?;
    Ok(())
}
