//! Delete-confirmation modal.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use frontdesk_core::DeleteTarget;

use crate::theme;

use super::centered;

pub fn render(frame: &mut Frame, area: Rect, target: &DeleteTarget) {
    let modal = centered(area, 56, 9);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .title(" Confirm Delete ")
        .title_style(
            Style::default()
                .fg(theme::ERROR_RED)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(theme::ERROR_RED));

    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let lines = vec![
        Line::from(Span::styled(
            format!("Delete {} {}?", target.kind, target.id.short()),
            Style::default().fg(theme::DIM_WHITE).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            target.kind.delete_warning(),
            Style::default().fg(theme::DIM_WHITE),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", theme::key_hint_key()),
            Span::styled(" delete   ", theme::key_hint()),
            Span::styled("n", theme::key_hint_key()),
            Span::styled(" / ", theme::key_hint()),
            Span::styled("Esc", theme::key_hint_key()),
            Span::styled(" cancel", theme::key_hint()),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
