//! Component trait: the building block for every screen.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use frontdesk_core::BackOffice;

use crate::action::Action;

/// Every screen implements Component.
///
/// Screens keep only view state (selection, scroll). Entity data is read
/// from the `BackOffice` on every call.
pub trait Component {
    /// Handle a keyboard event. Return an Action to dispatch, or None.
    fn handle_key_event(&mut self, _key: KeyEvent, _back_office: &BackOffice) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Render into the provided frame area.
    fn render(&self, frame: &mut Frame, area: Rect, back_office: &BackOffice);

    fn focused(&self) -> bool;

    fn set_focused(&mut self, focused: bool);

    /// Entity id of the highlighted row, if the screen has one.
    fn selected(&self, _back_office: &BackOffice) -> Option<frontdesk_core::EntityId> {
        None
    }

    /// Reset the selection after the underlying rows changed.
    fn reset_selection(&mut self) {}

    /// Short name for logs.
    fn id(&self) -> &'static str;
}
