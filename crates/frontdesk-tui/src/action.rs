//! All possible UI actions. Actions are the sole mechanism for state mutation.

use frontdesk_core::{EntityId, EntityKind};

use crate::screen::ScreenId;

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    /// Close the newest toast.
    DismissToast,

    // ── Navigation ────────────────────────────────────────────────
    SwitchScreen(ScreenId),
    ToggleHelp,
    /// Esc outside of any overlay.
    GoBack,

    // ── Data ──────────────────────────────────────────────────────
    Refresh,

    // ── List reductions ───────────────────────────────────────────
    OpenSearch,
    SearchInput(char),
    SearchBackspace,
    /// Leave search input; `keep` retains the reduction.
    CloseSearch { keep: bool },
    ApplyFilter(EntityKind),
    ClearFilter(EntityKind),

    // ── Forms ─────────────────────────────────────────────────────
    OpenAddForm(EntityKind),
    OpenEditForm(EntityKind, EntityId),
    CloseForm,
    FormNextField,
    FormPrevField,
    FormInput(char),
    FormBackspace,
    /// Step an enumerated or dropdown field forwards (`true`) or back.
    FormCycle(bool),
    SubmitForm,

    // ── Delete confirmation ───────────────────────────────────────
    RequestDelete(EntityKind, EntityId),
    ConfirmYes,
    ConfirmNo,

    // ── Booking status ────────────────────────────────────────────
    CheckIn(EntityId),
    CheckOut(EntityId),
}

impl Action {
    /// Whether handling this action talks to the backend.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Refresh
                | Self::OpenAddForm(EntityKind::Booking)
                | Self::OpenEditForm(..)
                | Self::SubmitForm
                | Self::ConfirmYes
                | Self::CheckIn(_)
                | Self::CheckOut(_)
        )
    }
}
