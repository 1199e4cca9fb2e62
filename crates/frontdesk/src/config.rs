//! CLI configuration: thin wrapper around `frontdesk_config` shared types.
//!
//! Re-exports the shared types and adds resolution that respects
//! `GlobalOpts` flag overrides (--url, --api-path, --insecure, --timeout).

use std::time::Duration;

use frontdesk_core::{BackOfficeConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use frontdesk_config::{
    Config, Profile, config_path, load_config_or_default, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    config.active_profile_name(global.profile.as_deref())
}

/// Comma-separated profile names for help text.
pub fn available_profiles(config: &Config) -> String {
    if config.profiles.is_empty() {
        "(none)".into()
    } else {
        config
            .profiles
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Build a `BackOfficeConfig` from the config file, profile, and flags.
///
/// Flags win over the profile. Without a matching profile, `--url` alone is
/// enough; an explicitly requested profile that does not exist is an error.
pub fn resolve_back_office_config(global: &GlobalOpts) -> Result<BackOfficeConfig, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    let profile = match (cfg.profiles.get(&profile_name), &global.url) {
        (Some(profile), _) => profile.clone(),
        (None, _) if global.profile.is_some() => {
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: available_profiles(&cfg),
            });
        }
        (None, Some(url)) => Profile {
            url: url.clone(),
            ..Profile::default()
        },
        (None, None) => {
            return Err(CliError::NoConfig {
                path: config_path().display().to_string(),
            });
        }
    };

    let mut resolved = frontdesk_config::profile_to_back_office_config(&profile, &cfg.defaults)?;
    apply_overrides(&mut resolved, global)?;
    Ok(resolved)
}

fn apply_overrides(config: &mut BackOfficeConfig, global: &GlobalOpts) -> Result<(), CliError> {
    if let Some(ref url_str) = global.url {
        config.url = url_str.parse().map_err(|_| CliError::Validation {
            field: "url".into(),
            reason: format!("invalid URL: {url_str}"),
        })?;
    }
    if let Some(ref api_path) = global.api_path {
        config.api_path.clone_from(api_path);
    }
    if global.insecure {
        config.tls = TlsVerification::DangerAcceptInvalid;
    }
    if let Some(secs) = global.timeout {
        config.timeout = Duration::from_secs(secs);
    }
    Ok(())
}
