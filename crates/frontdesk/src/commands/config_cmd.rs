//! Config subcommand handlers.

use dialoguer::{Confirm, Input};
use tabled::Tabled;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn invalid(field: &str, reason: &str) -> CliError {
    CliError::Validation {
        field: field.into(),
        reason: reason.into(),
    }
}

fn format_config(cfg: &Config) -> String {
    let mut lines = vec![
        format!(
            "default_profile: {}",
            cfg.default_profile.as_deref().unwrap_or("(unset)")
        ),
        format!("output:          {}", cfg.defaults.output),
        format!("color:           {}", cfg.defaults.color),
        format!("timeout:         {}s", cfg.defaults.timeout),
        format!("toast_duration:  {}", cfg.defaults.toast_duration),
    ];
    for (name, p) in &cfg.profiles {
        lines.push(String::new());
        lines.push(format!("[profiles.{name}]"));
        lines.push(format!("url      = {}", p.url));
        if let Some(ref api_path) = p.api_path {
            lines.push(format!("api_path = {api_path}"));
        }
        if let Some(ref ca) = p.ca_cert {
            lines.push(format!("ca_cert  = {}", ca.display()));
        }
        if let Some(insecure) = p.insecure {
            lines.push(format!("insecure = {insecure}"));
        }
        if let Some(timeout) = p.timeout {
            lines.push(format!("timeout  = {timeout}"));
        }
        if let Some(ref toast) = p.toast_duration {
            lines.push(format!("toast_duration = {toast}"));
        }
    }
    lines.join("\n")
}

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "URL")]
    url: String,
    #[tabled(rename = "Default")]
    default: String,
}

#[derive(serde::Serialize)]
struct ProfileEntry<'a> {
    name: &'a str,
    #[serde(flatten)]
    profile: &'a Profile,
    default: bool,
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("Front desk: configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            let url: String = Input::new()
                .with_prompt("Backend URL")
                .default("http://localhost:5000".into())
                .interact_text()
                .map_err(prompt_err)?;
            if url.parse::<url::Url>().is_err() {
                return Err(invalid("url", &format!("invalid URL: {url}")));
            }

            let api_path: String = Input::new()
                .with_prompt("API path")
                .default(frontdesk_core::DEFAULT_API_PATH.into())
                .interact_text()
                .map_err(prompt_err)?;

            let insecure = url.starts_with("https://")
                && Confirm::new()
                    .with_prompt("Accept invalid TLS certificates?")
                    .default(false)
                    .interact()
                    .map_err(prompt_err)?;

            let profile = Profile {
                url,
                api_path: Some(api_path),
                insecure: insecure.then_some(true),
                ..Profile::default()
            };

            let mut cfg = config::load_config_or_default();
            cfg.profiles.insert(profile_name.clone(), profile);
            cfg.default_profile = Some(profile_name.clone());
            config::save_config(&cfg)?;

            eprintln!("\n✓ Configuration written to {}", config_path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: frontdesk status");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let out = output::render_single(&global.output, &cfg, format_config, |_| {
                config::config_path().display().to_string()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Set <key> <value> ───────────────────────────────────────
        ConfigCommand::Set { key, value } => {
            let mut cfg = config::load_config_or_default();
            let profile_name = config::active_profile_name(global, &cfg);
            let profile = cfg.profiles.entry(profile_name.clone()).or_default();

            match key.as_str() {
                "url" => {
                    if value.parse::<url::Url>().is_err() {
                        return Err(invalid("url", &format!("invalid URL: {value}")));
                    }
                    profile.url = value;
                }
                "api_path" | "api-path" => profile.api_path = Some(value),
                "insecure" => {
                    profile.insecure = Some(
                        value
                            .parse()
                            .map_err(|_| invalid("insecure", "must be 'true' or 'false'"))?,
                    );
                }
                "timeout" => {
                    profile.timeout = Some(
                        value
                            .parse()
                            .map_err(|_| invalid("timeout", "must be a number (seconds)"))?,
                    );
                }
                "ca_cert" | "ca-cert" => profile.ca_cert = Some(value.into()),
                "toast_duration" | "toast-duration" => {
                    frontdesk_config::parse_duration("toast_duration", &value)?;
                    profile.toast_duration = Some(value);
                }
                other => {
                    return Err(invalid(
                        other,
                        &format!(
                            "unknown config key '{other}'. Valid keys: url, api_path, \
                             insecure, timeout, ca_cert, toast_duration"
                        ),
                    ));
                }
            }

            config::save_config(&cfg)?;
            eprintln!("✓ Set {key} on profile '{profile_name}'");
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: frontdesk config init");
                return Ok(());
            }
            let active = config::active_profile_name(global, &cfg);
            let entries: Vec<ProfileEntry<'_>> = cfg
                .profiles
                .iter()
                .map(|(name, profile)| ProfileEntry {
                    name,
                    profile,
                    default: *name == active,
                })
                .collect();
            let refs: Vec<&ProfileEntry<'_>> = entries.iter().collect();
            let out = output::render_list(
                &global.output,
                &refs,
                |e| ProfileRow {
                    name: e.name.to_owned(),
                    url: e.profile.url.clone(),
                    default: if e.default { "*".into() } else { String::new() },
                },
                |e| e.name.to_owned(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Use <name> ─────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();
            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    available: config::available_profiles(&cfg),
                    name,
                });
            }
            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            eprintln!("✓ Default profile set to '{name}'");
            Ok(())
        }
    }
}
