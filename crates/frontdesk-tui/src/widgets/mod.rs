//! Overlays drawn on top of the active screen.

pub mod confirm;
pub mod form;
pub mod toast;

use ratatui::layout::Rect;

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn centered_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered(area, 50, 10), Rect::new(25, 15, 50, 10));
        assert_eq!(centered(Rect::new(0, 0, 20, 6), 50, 10), Rect::new(2, 1, 16, 4));
    }
}
