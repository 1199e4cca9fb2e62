mod cli;
mod commands;
mod config;
mod error;
mod output;

use std::io::IsTerminal;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use frontdesk_core::BackOffice;

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

const LOG_TARGETS: [&str; 3] = ["frontdesk", "frontdesk_core", "frontdesk_api"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(&cli.global);
    init_diagnostics(&cli.global);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

/// `RUST_LOG` wins; otherwise only this workspace's crates log, at a level
/// set by `-v` and silenced to errors by `--quiet`.
fn log_filter(verbose: u8, quiet: bool) -> String {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn init_tracing(global: &GlobalOpts) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(global.verbose, global.quiet)));

    // stdout carries command output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(output::should_color(&global.color, std::io::stderr().is_terminal()))
        .with_target(false)
        .init();
}

/// Error reports follow `--color` like the rest of stderr.
fn init_diagnostics(global: &GlobalOpts) {
    let color = output::should_color(&global.color, std::io::stderr().is_terminal());
    let _ = miette::set_hook(Box::new(move |_| {
        Box::new(miette::MietteHandlerOpts::new().color(color).build())
    }));
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't touch the backend
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "frontdesk", &mut std::io::stdout());
            Ok(())
        }

        cmd => {
            let back_office_config = config::resolve_back_office_config(&cli.global)?;
            let mut back_office = BackOffice::new(back_office_config)?;

            tracing::debug!(
                command = ?cmd,
                url = %back_office.client().api_url(),
                "dispatching command"
            );
            commands::dispatch(cmd, &mut back_office, &cli.global).await
        }
    }
}
