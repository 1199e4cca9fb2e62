//! Dashboard screen: greeting and today's summary figures.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use frontdesk_core::{BackOffice, DashboardSummary, format};

use crate::component::Component;
use crate::theme;

pub struct DashboardScreen {
    focused: bool,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self { focused: false }
    }
}

/// Title, value, and accent of each summary card.
pub fn cards(summary: &DashboardSummary) -> [(&'static str, String, Color); 4] {
    [
        ("Total Rooms", summary.total_rooms.to_string(), theme::ACCENT_BLUE),
        ("Total Guests", summary.total_guests.to_string(), theme::ACCENT_VIOLET),
        (
            "Active Bookings",
            summary.active_bookings.to_string(),
            theme::INFO_CYAN,
        ),
        (
            "Today's Revenue",
            format::currency(summary.revenue),
            theme::SUCCESS_GREEN,
        ),
    ]
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, value: String, accent: Color) {
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let y_offset = inner.height.saturating_sub(1) / 2;
    let line_area = Rect::new(inner.x, inner.y + y_offset, inner.width, 1.min(inner.height));
    frame.render_widget(
        Paragraph::new(Span::styled(
            value,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        line_area,
    );
}

impl Component for DashboardScreen {
    fn render(&self, frame: &mut Frame, area: Rect, back_office: &BackOffice) {
        let block = Block::default()
            .title(" Dashboard ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([
            Constraint::Length(2), // greeting
            Constraint::Length(5), // cards
            Constraint::Min(0),
            Constraint::Length(1), // hints
        ])
        .split(inner);

        let greeting = Line::from(vec![
            Span::styled(
                format!("  {}! ", format::greeting(&chrono::Local::now())),
                Style::default()
                    .fg(theme::ACCENT_VIOLET)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("Today is {}.", format::long_date(back_office.today())),
                Style::default().fg(theme::DIM_WHITE),
            ),
        ]);
        frame.render_widget(Paragraph::new(greeting), layout[0]);

        let slots = Layout::horizontal([Constraint::Fill(1); 4]).split(layout[1]);
        for ((title, value, accent), slot) in cards(back_office.dashboard()).into_iter().zip(slots.iter()) {
            render_card(frame, *slot, title, value, accent);
        }

        let hints = Line::from(vec![
            Span::styled("  2-4 ", theme::key_hint_key()),
            Span::styled("manage rooms, guests, bookings  ", theme::key_hint()),
            Span::styled("r ", theme::key_hint_key()),
            Span::styled("refresh", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[3]);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &'static str {
        "Dashboard"
    }
}
