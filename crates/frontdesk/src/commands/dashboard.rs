//! Today's summary figures.

use frontdesk_core::{BackOffice, DashboardSummary, format};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(back_office: &mut BackOffice, global: &GlobalOpts) -> Result<(), CliError> {
    let spin = util::spinner(global, "Loading dashboard");
    let refreshed = back_office.refresh_dashboard().await;
    spin.finish_and_clear();
    refreshed?;

    let heading = format!(
        "{}! Today is {}.",
        format::greeting(&chrono::Local::now()),
        format::long_date(back_office.today())
    );
    let out = output::render_single(
        &global.output,
        back_office.dashboard(),
        |d| format!("{heading}\n\n{}", detail(d)),
        |d| d.active_bookings.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn detail(d: &DashboardSummary) -> String {
    [
        format!("Total rooms:     {}", d.total_rooms),
        format!("Total guests:    {}", d.total_guests),
        format!("Active bookings: {}", d.active_bookings),
        format!("Revenue today:   {}", format::currency(d.revenue)),
    ]
    .join("\n")
}
