//! Shared configuration for the frontdesk CLI and TUI.
//!
//! TOML profiles, environment overrides, and translation to
//! `frontdesk_core::BackOfficeConfig`. Both binaries depend on this crate;
//! the CLI layers its global flags on top.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use frontdesk_core::{BackOfficeConfig, DEFAULT_API_PATH, TlsVerification};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found")]
    UnknownProfile { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named backend profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
        }
    }
}

impl Config {
    /// The profile to use: `requested`, else `default_profile`, else `"default"`.
    pub fn active_profile_name(&self, requested: Option<&str>) -> String {
        requested
            .map(str::to_owned)
            .or_else(|| self.default_profile.clone())
            .unwrap_or_else(|| "default".into())
    }

    pub fn profile(&self, name: &str) -> Result<&Profile, ConfigError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile { name: name.into() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Toast lifetime, humantime syntax (`5s`, `1500ms`).
    #[serde(default = "default_toast_duration")]
    pub toast_duration: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
            toast_duration: default_toast_duration(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_toast_duration() -> String {
    "5s".into()
}

/// A named backend profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    /// Backend root URL (e.g., "http://localhost:5000").
    pub url: String,

    /// REST path prefix; `/api` when unset.
    pub api_path: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Accept invalid TLS certificates.
    pub insecure: Option<bool>,

    /// Override timeout (seconds).
    pub timeout: Option<u64>,

    /// Override toast lifetime.
    pub toast_duration: Option<String>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "frontdesk", "frontdesk").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("frontdesk");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from `path` + environment. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("FRONTDESK_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if it cannot be read.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Translation to core config ──────────────────────────────────────

/// Parse a humantime duration such as `5s` or `1500ms`.
pub fn parse_duration(field: &str, raw: &str) -> Result<Duration, ConfigError> {
    humantime::parse_duration(raw.trim()).map_err(|e| ConfigError::Validation {
        field: field.into(),
        reason: format!("'{raw}': {e}"),
    })
}

/// Build a `BackOfficeConfig` from a profile, falling back to `defaults`
/// for anything the profile leaves unset. No CLI flag overrides.
pub fn profile_to_back_office_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<BackOfficeConfig, ConfigError> {
    let url: url::Url = profile.url.parse().map_err(|_| ConfigError::Validation {
        field: "url".into(),
        reason: format!("invalid URL: {}", profile.url),
    })?;

    let tls = if profile.insecure.unwrap_or(false) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    let timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));
    let toast_duration = parse_duration(
        "toast_duration",
        profile
            .toast_duration
            .as_deref()
            .unwrap_or(&defaults.toast_duration),
    )?;

    Ok(BackOfficeConfig {
        url,
        api_path: profile
            .api_path
            .clone()
            .unwrap_or_else(|| DEFAULT_API_PATH.into()),
        tls,
        timeout,
        toast_duration,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn profile(url: &str) -> Profile {
        Profile {
            url: url.into(),
            ..Profile::default()
        }
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.default_profile.as_deref(), Some("default"));
        assert_eq!(cfg.defaults.output, "table");
        assert_eq!(cfg.defaults.toast_duration, "5s");
        assert!(cfg.profiles.is_empty());
    }

    #[test]
    fn save_then_load_preserves_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.profiles.insert(
            "front".into(),
            Profile {
                api_path: Some("/v1".into()),
                timeout: Some(5),
                ..profile("http://localhost:5000")
            },
        );
        cfg.default_profile = Some("front".into());
        save_config_to(&cfg, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.active_profile_name(None), "front");
        assert_eq!(loaded.profile("front").unwrap().api_path.as_deref(), Some("/v1"));
        assert!(matches!(
            loaded.profile("missing"),
            Err(ConfigError::UnknownProfile { .. })
        ));
    }

    #[test]
    fn reads_hand_written_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
default_profile = "lobby"

[defaults]
toast_duration = "2s"

[profiles.lobby]
url = "https://hotel.example.com"
insecure = true
"#,
        )
        .unwrap();

        let cfg = load_config_from(&path).unwrap();
        let lobby = cfg.profile("lobby").unwrap();
        assert_eq!(lobby.insecure, Some(true));
        assert_eq!(cfg.defaults.timeout, 30);

        let core = profile_to_back_office_config(lobby, &cfg.defaults).unwrap();
        assert_eq!(core.tls, TlsVerification::DangerAcceptInvalid);
        assert_eq!(core.toast_duration, Duration::from_secs(2));
        assert_eq!(core.api_path, "/api");
    }

    #[test]
    fn profile_values_override_defaults() {
        let p = Profile {
            ca_cert: Some(PathBuf::from("/etc/ssl/hotel.pem")),
            timeout: Some(90),
            toast_duration: Some("1500ms".into()),
            ..profile("http://localhost:5000")
        };
        let core = profile_to_back_office_config(&p, &Defaults::default()).unwrap();
        assert_eq!(core.timeout, Duration::from_secs(90));
        assert_eq!(core.toast_duration, Duration::from_millis(1500));
        assert_eq!(
            core.tls,
            TlsVerification::CustomCa(PathBuf::from("/etc/ssl/hotel.pem"))
        );
    }

    #[test]
    fn rejects_bad_url_and_duration() {
        let err = profile_to_back_office_config(&profile("not a url"), &Defaults::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "url"));

        let p = Profile {
            toast_duration: Some("soon".into()),
            ..profile("http://localhost:5000")
        };
        let err = profile_to_back_office_config(&p, &Defaults::default()).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation { ref field, .. } if field == "toast_duration")
        );
    }

    #[test]
    fn explicit_profile_wins() {
        let cfg = Config::default();
        assert_eq!(cfg.active_profile_name(Some("night")), "night");
        assert_eq!(cfg.active_profile_name(None), "default");
    }
}
