//! Rooms, guests, and bookings screens: one selectable table per entity.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

use frontdesk_core::list::Listed;
use frontdesk_core::{
    BackOffice, BookingFilter, EmptyState, EntityId, EntityKind, EntityList, ListRow, RowFilter,
};

use crate::action::Action;
use crate::component::Component;
use crate::theme;

// ── View over the back office lists ─────────────────────────────────

/// What one list screen draws.
pub struct ListView<'a> {
    pub rows: Vec<&'a ListRow>,
    pub placeholder: Option<EmptyState>,
    pub error: Option<String>,
    pub summary: String,
    /// Active reduction, e.g. `search: ada`.
    pub filter: Option<String>,
}

fn view<T: Listed>(list: &EntityList<T>, status_label: impl Fn(&T::Filter) -> &'static str) -> ListView<'_> {
    ListView {
        rows: list.visible().map(|(_, row)| row).collect(),
        placeholder: list.placeholder(),
        error: list.error(),
        summary: list.summary(),
        filter: match list.filter() {
            RowFilter::All => None,
            RowFilter::Search(term) => Some(format!("search: {term}")),
            RowFilter::Status { filter, .. } => Some(status_label(filter).to_owned()),
        },
    }
}

pub fn list_view(back_office: &BackOffice, kind: EntityKind) -> ListView<'_> {
    match kind {
        EntityKind::Room => view(back_office.rooms(), |_| "available"),
        EntityKind::Guest => view(back_office.guests(), |never| match *never {}),
        EntityKind::Booking => view(back_office.bookings(), |f| match f {
            BookingFilter::Today => "today",
            BookingFilter::Upcoming => "upcoming",
        }),
    }
}

// ── Screen ──────────────────────────────────────────────────────────

pub struct EntityScreen {
    kind: EntityKind,
    focused: bool,
    table_state: TableState,
}

impl EntityScreen {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            focused: false,
            table_state: TableState::default().with_selected(Some(0)),
        }
    }

    fn selected_index(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    fn select(&mut self, idx: usize, len: usize) {
        self.table_state
            .select(Some(idx.min(len.saturating_sub(1))));
    }

    fn status_column(&self) -> Option<usize> {
        self.kind.headers().iter().position(|h| *h == "Status")
    }
}

impl Component for EntityScreen {
    fn handle_key_event(&mut self, key: KeyEvent, back_office: &BackOffice) -> Result<Option<Action>> {
        let len = list_view(back_office, self.kind).rows.len();
        let selected = self.selected(back_office);
        let kind = self.kind;

        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.select(self.selected_index() + 1, len);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.select(self.selected_index().saturating_sub(1), len);
                None
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.select(0, len);
                None
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.select(len.saturating_sub(1), len);
                None
            }
            KeyCode::Char('f') if kind != EntityKind::Guest => Some(Action::ApplyFilter(kind)),
            KeyCode::Char('c') => Some(Action::ClearFilter(kind)),
            KeyCode::Char('a') => Some(Action::OpenAddForm(kind)),
            KeyCode::Char('e') | KeyCode::Enter => {
                selected.map(|id| Action::OpenEditForm(kind, id))
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                selected.map(|id| Action::RequestDelete(kind, id))
            }
            KeyCode::Char('i') if kind == EntityKind::Booking => selected.map(Action::CheckIn),
            KeyCode::Char('o') if kind == EntityKind::Booking => selected.map(Action::CheckOut),
            _ => None,
        };
        Ok(action)
    }

    fn render(&self, frame: &mut Frame, area: Rect, back_office: &BackOffice) {
        let view = list_view(back_office, self.kind);

        let title = match &view.filter {
            Some(filter) => format!(" {} ({}) [{filter}] ", self.kind.collection(), view.rows.len()),
            None => format!(" {} ({}) ", self.kind.collection(), view.rows.len()),
        };
        let block = Block::default()
            .title(title)
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
            Constraint::Min(1),    // table
            Constraint::Length(1), // summary
            Constraint::Length(1), // hints
        ])
        .split(inner);

        if let Some(message) = view.error {
            render_centered(frame, layout[0], vec![Line::from(Span::styled(
                message,
                Style::default().fg(theme::ERROR_RED),
            ))]);
        } else if let Some(empty) = view.placeholder {
            render_centered(
                frame,
                layout[0],
                vec![
                    Line::from(Span::styled(
                        empty.title,
                        Style::default()
                            .fg(theme::DIM_WHITE)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(empty.hint, theme::key_hint())),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("a ", theme::key_hint_key()),
                        Span::styled(empty.action, theme::key_hint()),
                    ]),
                ],
            );
        } else {
            self.render_table(frame, layout[0], &view.rows);
        }

        frame.render_widget(
            Paragraph::new(Span::styled(format!("  {}", view.summary), theme::key_hint())),
            layout[1],
        );

        let mut hints = vec![
            Span::styled("  a ", theme::key_hint_key()),
            Span::styled("add  ", theme::key_hint()),
            Span::styled("e ", theme::key_hint_key()),
            Span::styled("edit  ", theme::key_hint()),
            Span::styled("d ", theme::key_hint_key()),
            Span::styled("delete  ", theme::key_hint()),
            Span::styled("/ ", theme::key_hint_key()),
            Span::styled("search  ", theme::key_hint()),
        ];
        match self.kind {
            EntityKind::Room => hints.extend([
                Span::styled("f ", theme::key_hint_key()),
                Span::styled("available  ", theme::key_hint()),
            ]),
            EntityKind::Booking => hints.extend([
                Span::styled("f ", theme::key_hint_key()),
                Span::styled("today/upcoming  ", theme::key_hint()),
                Span::styled("i/o ", theme::key_hint_key()),
                Span::styled("check in/out  ", theme::key_hint()),
            ]),
            EntityKind::Guest => {}
        }
        hints.extend([
            Span::styled("c ", theme::key_hint_key()),
            Span::styled("clear", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(Line::from(hints)), layout[2]);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn selected(&self, back_office: &BackOffice) -> Option<EntityId> {
        list_view(back_office, self.kind)
            .rows
            .get(self.selected_index())
            .map(|row| row.id.clone())
    }

    fn reset_selection(&mut self) {
        self.table_state.select(Some(0));
    }

    fn id(&self) -> &'static str {
        self.kind.collection()
    }
}

impl EntityScreen {
    fn render_table(&self, frame: &mut Frame, area: Rect, rows: &[&ListRow]) {
        let header = Row::new(
            self.kind
                .headers()
                .iter()
                .map(|h| Cell::from(*h).style(theme::table_header())),
        );

        let status_col = self.status_column();
        let body: Vec<Row> = rows
            .iter()
            .map(|row| {
                Row::new(row.cells.iter().enumerate().map(|(i, text)| {
                    let cell = Cell::from(text.clone());
                    if Some(i) == status_col {
                        cell.style(Style::default().fg(theme::status_color(text)))
                    } else {
                        cell
                    }
                }))
                .style(theme::table_row())
            })
            .collect();

        let widths = vec![Constraint::Fill(1); self.kind.headers().len()];
        let table = Table::new(body, widths)
            .header(header)
            .row_highlight_style(theme::table_selected())
            .highlight_symbol("▸ ");

        let mut state = self.table_state;
        if let Some(idx) = state.selected() {
            state.select(Some(idx.min(rows.len().saturating_sub(1))));
        }
        frame.render_stateful_widget(table, area, &mut state);
    }
}

fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let y_offset = area.height.saturating_sub(height) / 2;
    let centered = Rect::new(area.x, area.y + y_offset, area.width, height.min(area.height));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
}
