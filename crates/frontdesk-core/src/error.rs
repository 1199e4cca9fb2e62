// ── Core error types ──
//
// User-facing errors from frontdesk-core. Consumers never see reqwest
// errors or JSON parse failures directly; the `From<frontdesk_api::Error>`
// impl translates transport-layer errors into domain-appropriate variants.

use thiserror::Error;

use crate::model::{BookingStatus, EntityId, EntityKind};
use crate::validate::ValidationErrors;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to backend at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Backend request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    // ── Input errors ─────────────────────────────────────────────────
    #[error("Validation failed: {errors}")]
    ValidationFailed { errors: ValidationErrors },

    #[error("Check-out date must be after check-in date")]
    InvalidStay,

    #[error("Cannot move booking from {from} to {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    #[error("No {kind} form is open")]
    FormClosed { kind: EntityKind },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Input rejected before any request was made.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            Self::ValidationFailed { .. } | Self::InvalidStay | Self::InvalidTransition { .. }
        )
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<frontdesk_api::Error> for CoreError {
    fn from(err: frontdesk_api::Error) -> Self {
        let timed_out = err.is_timeout();
        let unreachable = err.is_connect();
        let status = err.status();
        match err {
            _ if timed_out => CoreError::Timeout,
            frontdesk_api::Error::Transport(e) if unreachable => CoreError::ConnectionFailed {
                url: e
                    .url()
                    .map_or_else(|| "<unknown>".into(), ToString::to_string),
                reason: e.to_string(),
            },
            frontdesk_api::Error::Transport(e) => CoreError::Api {
                message: e.to_string(),
                status,
            },
            frontdesk_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            frontdesk_api::Error::ClientBuild(msg) => CoreError::Config { message: msg },
            frontdesk_api::Error::Api { message, .. } => CoreError::Api { message, status },
            frontdesk_api::Error::Unreachable { status } => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("backend responded with HTTP {status}"),
            },
            frontdesk_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}

impl CoreError {
    /// Convert an error from a request addressed to one entity, so a 404
    /// names that entity.
    pub fn from_api_for(err: frontdesk_api::Error, kind: EntityKind, id: &EntityId) -> Self {
        if err.is_not_found() {
            CoreError::NotFound {
                kind,
                id: id.to_string(),
            }
        } else {
            err.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_rejection_keeps_status() {
        let err: CoreError = frontdesk_api::Error::Api {
            status: 409,
            message: "Room number already exists".into(),
        }
        .into();
        assert!(matches!(
            err,
            CoreError::Api { status: Some(409), ref message } if message == "Room number already exists"
        ));
    }

    #[test]
    fn unreachable_probe_is_connection_failure() {
        let err: CoreError = frontdesk_api::Error::Unreachable { status: 503 }.into();
        assert!(matches!(err, CoreError::ConnectionFailed { .. }));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn missing_entity_is_named() {
        let gone = || frontdesk_api::Error::Api {
            status: 404,
            message: "Room not found".into(),
        };
        let id = EntityId::from("r9");

        let err = CoreError::from_api_for(gone(), EntityKind::Room, &id);
        assert!(matches!(
            err,
            CoreError::NotFound { kind: EntityKind::Room, ref id } if id == "r9"
        ));
        // without a target the status is kept as-is
        assert!(matches!(CoreError::from(gone()), CoreError::Api { status: Some(404), .. }));
    }

    #[test]
    fn invalid_stay_message() {
        assert_eq!(
            CoreError::InvalidStay.to_string(),
            "Check-out date must be after check-in date"
        );
        assert!(CoreError::InvalidStay.is_user_input());
    }
}
