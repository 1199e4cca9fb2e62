//! Toast stack in the bottom-right corner.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use frontdesk_core::Toast;

use crate::theme;

const WIDTH: u16 = 44;
const HEIGHT: u16 = 3;

/// Slots for `count` toasts stacked upwards from the bottom-right corner,
/// newest at the bottom. Toasts that do not fit are dropped from the top.
pub fn areas(area: Rect, count: usize) -> Vec<Rect> {
    let width = WIDTH.min(area.width);
    let fit = usize::from(area.height / HEIGHT);
    let shown = count.min(fit);
    let x = area.x + area.width - width;
    let bottom = area.y + area.height;

    (0..shown)
        .map(|slot| {
            let from_bottom = u16::try_from(shown - slot).unwrap_or(u16::MAX);
            Rect::new(x, bottom.saturating_sub(from_bottom * HEIGHT), width, HEIGHT)
        })
        .collect()
}

pub fn render(frame: &mut Frame, area: Rect, toasts: &[Toast]) {
    let slots = areas(area, toasts.len());
    let newest = &toasts[toasts.len() - slots.len()..];

    for (toast, slot) in newest.iter().zip(slots) {
        let color = theme::severity(toast.severity);
        frame.render_widget(Clear, slot);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(theme::BG_DARK));
        let line = Line::from(vec![
            Span::styled(format!("{} ", toast.severity.icon()), Style::default().fg(color)),
            Span::styled(toast.message.as_str(), Style::default().fg(theme::DIM_WHITE)),
        ]);
        frame.render_widget(
            Paragraph::new(line).block(block).wrap(Wrap { trim: true }),
            slot,
        );
    }
}
