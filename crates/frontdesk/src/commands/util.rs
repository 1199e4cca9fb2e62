//! Shared helpers for command handlers.

use std::io::{self, IsTerminal};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Tabled;

use frontdesk_core::list::Listed;
use frontdesk_core::{BackOffice, EntityList, ListRow};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Without a terminal to prompt on, the operation is refused.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(io::Error::other(e)))?;
    Ok(confirmed)
}

/// Spinner on stderr while a request is in flight. Hidden when quiet or
/// when stderr is not a terminal.
pub fn spinner(global: &GlobalOpts, message: &str) -> ProgressBar {
    if global.quiet || !io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(message.to_owned());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Print and clear every toast the back office raised.
pub fn flush_toasts(back_office: &mut BackOffice, global: &GlobalOpts) {
    let toasts = back_office.toasts_mut().drain();
    output::print_toasts(&toasts, global);
}

/// Cell `i` of a rendered row, empty when missing.
pub fn cell(row: &ListRow, i: usize) -> String {
    row.cells.get(i).cloned().unwrap_or_default()
}

/// Print the visible part of a list in the chosen format.
///
/// Tables also get the empty-state placeholder or the item summary on
/// stderr.
pub fn print_list<T, R>(
    list: &EntityList<T>,
    global: &GlobalOpts,
    to_row: impl Fn(&ListRow) -> R,
) -> Result<(), CliError>
where
    T: Listed + serde::Serialize,
    R: Tabled,
{
    let (items, rows): (Vec<&T>, Vec<&ListRow>) = list.visible().unzip();

    if let OutputFormat::Table = global.output {
        if let Some(empty) = list.placeholder() {
            if !global.quiet {
                eprintln!(
                    "{}. {}: frontdesk {} add",
                    empty.title,
                    empty.hint,
                    T::KIND.collection()
                );
            }
            return Ok(());
        }
        let table = output::render_table(&rows.iter().map(|r| to_row(r)).collect::<Vec<_>>());
        output::print_output(&table, global.quiet);
        if !global.quiet {
            eprintln!("{}", list.summary());
        }
        return Ok(());
    }

    let out = output::render_single(
        &global.output,
        &items,
        |_| String::new(),
        |items| {
            items
                .iter()
                .map(|item| item.id().to_string())
                .collect::<Vec<_>>()
                .join("\n")
        },
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
