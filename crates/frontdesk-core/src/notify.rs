// ── Notification and modal surface ──
//
// Toasts are transient, stacked messages that expire after a fixed time
// or on manual dismissal. The delete confirmation holds at most one
// pending target; a new request replaces it.

use std::time::{Duration, Instant};

use serde::Serialize;
use strum::{Display, EnumIter};
use tracing::debug;

use crate::model::{EntityId, EntityKind};

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Warning => "!",
            Self::Info => "i",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
    pub expires_at: Instant,
}

/// Stack of live toasts, oldest first.
#[derive(Debug, Clone)]
pub struct Toasts {
    live: Vec<Toast>,
    ttl: Duration,
    next_id: u64,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl Toasts {
    pub fn new(ttl: Duration) -> Self {
        Self {
            live: Vec::new(),
            ttl,
            next_id: 1,
        }
    }

    pub fn push(&mut self, severity: Severity, message: impl Into<String>) -> u64 {
        self.push_at(severity, message, Instant::now())
    }

    pub fn push_at(&mut self, severity: Severity, message: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        debug!(%severity, %message, "toast");
        self.live.push(Toast {
            id,
            severity,
            message,
            expires_at: now + self.ttl,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(Severity::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(Severity::Error, message)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> u64 {
        self.push(Severity::Warning, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(Severity::Info, message)
    }

    /// Manual close. Returns whether the toast was still up.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.live.len();
        self.live.retain(|t| t.id != id);
        self.live.len() != before
    }

    /// Drop toasts whose time is up. Returns how many went away.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.live.len();
        self.live.retain(|t| t.expires_at > now);
        before - self.live.len()
    }

    pub fn live(&self) -> &[Toast] {
        &self.live
    }

    /// Take every live toast (one-shot front ends print them and exit).
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.live)
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

// ── Delete confirmation ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteTarget {
    pub kind: EntityKind,
    pub id: EntityId,
}

/// The delete-confirmation modal. Open while a target is pending.
#[derive(Debug, Clone, Default)]
pub struct DeleteConfirmation {
    pending: Option<DeleteTarget>,
}

impl DeleteConfirmation {
    /// Open for `id`, replacing any earlier target.
    pub fn request(&mut self, kind: EntityKind, id: EntityId) {
        self.pending = Some(DeleteTarget { kind, id });
    }

    /// Close without side effects.
    pub fn cancel(&mut self) -> Option<DeleteTarget> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<&DeleteTarget> {
        self.pending.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Modal text for the pending target.
    pub fn message(&self) -> Option<&'static str> {
        self.pending.as_ref().map(|t| t.kind.delete_warning())
    }
}
