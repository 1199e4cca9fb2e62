// ── Runtime connection configuration ──
//
// These types describe how to reach the hotel backend and how the
// notification surface behaves. They never touch disk: the CLI/TUI builds
// a `BackOfficeConfig` from profiles and flags and hands it in.

use std::time::Duration;

use url::Url;

use crate::notify::DEFAULT_TOAST_DURATION;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (self-signed development backends).
    DangerAcceptInvalid,
}

/// Configuration for one back-office session.
///
/// Built by CLI/TUI, passed to `BackOffice` -- core never reads config files.
#[derive(Debug, Clone)]
pub struct BackOfficeConfig {
    /// Backend root URL (e.g., `http://localhost:5000`).
    pub url: Url,
    /// Path prefix of the REST resources (defaults to `/api`).
    pub api_path: String,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
    /// How long a toast stays up before auto-dismissal.
    pub toast_duration: Duration,
}

pub const DEFAULT_API_PATH: &str = "/api";

impl BackOfficeConfig {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            api_path: DEFAULT_API_PATH.into(),
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }

    pub(crate) fn transport(&self) -> frontdesk_api::TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => frontdesk_api::TlsMode::System,
            TlsVerification::CustomCa(path) => frontdesk_api::TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => frontdesk_api::TlsMode::DangerAcceptInvalid,
        };
        frontdesk_api::TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}
