//! `frontdesk-tui`: interactive terminal dashboard for the hotel back office.
//!
//! Built on [ratatui](https://ratatui.rs). Screens are navigable via number
//! keys (1-4): Dashboard, Rooms, Guests, and Bookings. Every backend call is
//! awaited inside the event loop, one action at a time.
//!
//! Logs are written to a file (default `/tmp/frontdesk-tui.log`) to avoid
//! corrupting the terminal UI.

mod action;
mod app;
mod component;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, bail};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use frontdesk_config::Profile;
use frontdesk_core::{BackOffice, BackOfficeConfig};

use crate::app::App;

/// Terminal dashboard for managing rooms, guests, and bookings.
#[derive(Parser, Debug)]
#[command(name = "frontdesk-tui", version, about)]
struct Cli {
    /// Config profile to use
    #[arg(short = 'p', long, env = "FRONTDESK_PROFILE")]
    profile: Option<String>,

    /// Backend root URL (e.g., http://localhost:5000); overrides the profile
    #[arg(short = 'u', long, env = "FRONTDESK_URL")]
    url: Option<String>,

    /// REST path prefix (defaults to /api)
    #[arg(long, env = "FRONTDESK_API_PATH")]
    api_path: Option<String>,

    /// Accept invalid TLS certificates
    #[arg(short = 'k', long, env = "FRONTDESK_INSECURE")]
    insecure: bool,

    /// Log file path (defaults to /tmp/frontdesk-tui.log)
    #[arg(long, default_value = "/tmp/frontdesk-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// File-based tracing. Nothing may be written to stdout/stderr while the
/// terminal is in raw mode. Hold the returned guard until exit.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "frontdesk_tui={log_level},frontdesk_core={log_level},frontdesk_api={log_level}"
        ))
    });

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("frontdesk-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

/// Resolve the backend from flags layered over the active profile.
///
/// Priority: CLI flags > env > config file.
fn resolve_config(cli: &Cli) -> Result<BackOfficeConfig> {
    let cfg = frontdesk_config::load_config()?;
    let profile_name = cfg.active_profile_name(cli.profile.as_deref());

    let mut profile = match cfg.profiles.get(&profile_name) {
        Some(profile) => profile.clone(),
        None if cli.url.is_some() => Profile::default(),
        None => bail!(
            "no profile '{profile_name}' configured; run `frontdesk config init` or pass --url"
        ),
    };

    if let Some(ref url) = cli.url {
        profile.url.clone_from(url);
    }
    if let Some(ref api_path) = cli.api_path {
        profile.api_path = Some(api_path.clone());
    }
    if cli.insecure {
        profile.insecure = Some(true);
    }

    Ok(frontdesk_config::profile_to_back_office_config(
        &profile,
        &cfg.defaults,
    )?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Hooks go in before the terminal is touched
    tui::install_hooks(&cli.log_file)?;

    let _log_guard = setup_tracing(&cli);

    let config = resolve_config(&cli)?;
    info!(url = %config.url, api_path = %config.api_path, "starting frontdesk-tui");

    let back_office = BackOffice::new(config)?;
    let mut app = App::new(back_office);
    app.run().await?;

    Ok(())
}
