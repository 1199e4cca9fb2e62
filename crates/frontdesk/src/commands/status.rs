//! Backend reachability check.

use serde::Serialize;

use frontdesk_core::{BackOffice, ConnectionState};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Serialize)]
struct StatusReport {
    url: String,
    api_url: String,
    connected: bool,
}

fn detail(s: &StatusReport) -> String {
    [
        format!("Backend: {}", s.url),
        format!("API:     {}", s.api_url),
        format!(
            "Status:  {}",
            if s.connected { "connected" } else { "disconnected" }
        ),
    ]
    .join("\n")
}

pub async fn handle(back_office: &mut BackOffice, global: &GlobalOpts) -> Result<(), CliError> {
    let spin = util::spinner(global, "Contacting backend");
    let checked = back_office.check_connection().await;
    spin.finish_and_clear();

    if let Err(e) = checked {
        let reason = match back_office.connection() {
            ConnectionState::Disconnected { reason } => reason.clone(),
            _ => e.to_string(),
        };
        return Err(CliError::ConnectionFailed {
            url: back_office.client().root_url().to_string(),
            reason,
        });
    }

    let report = StatusReport {
        url: back_office.client().root_url().to_string(),
        api_url: back_office.client().api_url().to_string(),
        connected: true,
    };
    let out = output::render_single(&global.output, &report, detail, |s| s.url.clone())?;
    output::print_output(&out, global.quiet);
    Ok(())
}
