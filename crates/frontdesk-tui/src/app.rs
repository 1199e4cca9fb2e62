//! Application core: event loop, screen management, action dispatch.

use std::collections::HashMap;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs},
};
use tracing::{debug, info, warn};

use frontdesk_core::{
    BackOffice, BookingFilter, ConnectionState, CoreError, EntityKind, RowFilter,
};

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventReader, tick_interval};
use crate::screen::ScreenId;
use crate::screens::create_screens;
use crate::screens::entities::list_view;
use crate::theme;
use crate::tui::Session;
use crate::widgets::{self, form};

/// Top-level application state and event loop.
pub struct App {
    back_office: BackOffice,
    active_screen: ScreenId,
    screens: HashMap<ScreenId, Box<dyn Component>>,
    running: bool,
    help_visible: bool,
    /// Search input of the active list, while typing.
    search: Option<String>,
    /// Focused field of the open form.
    form_cursor: usize,
    /// A backend request is in flight.
    busy: bool,
}

impl App {
    pub fn new(back_office: BackOffice) -> Self {
        let mut screens: HashMap<ScreenId, Box<dyn Component>> =
            create_screens().into_iter().collect();
        let active_screen = ScreenId::Dashboard;
        if let Some(screen) = screens.get_mut(&active_screen) {
            screen.set_focused(true);
        }

        Self {
            back_office,
            active_screen,
            screens,
            running: true,
            help_visible: false,
            search: None,
            form_cursor: 0,
            busy: false,
        }
    }

    /// Run the main event loop until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        let mut session = Session::start()?;
        let mut events = EventReader::spawn(tick_interval(self.back_office.toasts().ttl()));

        self.busy = true;
        session.draw(|frame| self.render(frame))?;
        self.startup().await;
        self.busy = false;
        session.draw(|frame| self.render(frame))?;

        info!("TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            let redraw = match event {
                Event::Key(key) => match self.handle_key_event(key)? {
                    Some(action) => {
                        if action.is_network() {
                            self.busy = true;
                            session.draw(|frame| self.render(frame))?;
                        }
                        self.process_action(action).await;
                        self.busy = false;
                        true
                    }
                    None => true,
                },
                Event::Tick(now) => self.back_office.toasts_mut().expire(now) > 0,
                Event::Resize => true,
            };
            if redraw && self.running {
                session.draw(|frame| self.render(frame))?;
            }
        }

        info!("TUI event loop ended");
        Ok(())
    }

    /// Probe the backend, then load every collection. Failures are toasted
    /// by the back office and leave the UI usable.
    async fn startup(&mut self) {
        if let Err(e) = self.back_office.check_connection().await {
            warn!(error = %e, "backend unreachable at startup");
        }
        report(self.back_office.load_all().await, "initial load");
    }

    fn active_kind(&self) -> Option<EntityKind> {
        self.active_screen.kind()
    }

    // ── Keys ─────────────────────────────────────────────────────────

    /// Map a key event to an action. Overlays capture input first, then
    /// global keys, then the active screen.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.back_office.delete_confirmation().is_open() {
            return Ok(match key.code {
                KeyCode::Char('y' | 'Y') => Some(Action::ConfirmYes),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::ConfirmNo),
                _ => None,
            });
        }

        if let Some(view) = form::open_form(&self.back_office) {
            let on_choice = view
                .field(self.form_cursor)
                .is_some_and(|f| f.choices.is_some());
            return Ok(form::handle_key(key, on_choice));
        }

        if self.search.is_some() {
            return Ok(match key.code {
                KeyCode::Esc => Some(Action::CloseSearch { keep: false }),
                KeyCode::Enter => Some(Action::CloseSearch { keep: true }),
                KeyCode::Backspace => Some(Action::SearchBackspace),
                KeyCode::Char(c) => Some(Action::SearchInput(c)),
                _ => None,
            });
        }

        if self.help_visible {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
                _ => None,
            });
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::NONE, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),
            (KeyModifiers::NONE, KeyCode::Char('x')) => return Ok(Some(Action::DismissToast)),
            (KeyModifiers::NONE, KeyCode::Char('/')) if self.active_kind().is_some() => {
                return Ok(Some(Action::OpenSearch));
            }
            (KeyModifiers::NONE, KeyCode::Char('r'))
            | (KeyModifiers::CONTROL, KeyCode::Char('r')) => return Ok(Some(Action::Refresh)),
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='4')) => {
                let n = c as u8 - b'0';
                if let Some(screen) = ScreenId::from_number(n) {
                    return Ok(Some(Action::SwitchScreen(screen)));
                }
            }
            (KeyModifiers::NONE, KeyCode::Tab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.next())));
            }
            (KeyModifiers::SHIFT, KeyCode::BackTab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.prev())));
            }
            (KeyModifiers::NONE, KeyCode::Esc) => return Ok(Some(Action::GoBack)),
            _ => {}
        }

        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_key_event(key, &self.back_office);
        }
        Ok(None)
    }

    // ── Actions ──────────────────────────────────────────────────────

    /// Apply one action. Back-office handlers are awaited inline, so two
    /// actions never touch the state at once.
    #[allow(clippy::too_many_lines)]
    async fn process_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,

            Action::DismissToast => {
                let newest = self.back_office.toasts().live().last().map(|t| t.id);
                if let Some(id) = newest {
                    self.back_office.toasts_mut().dismiss(id);
                }
            }

            Action::SwitchScreen(target) => {
                if target != self.active_screen {
                    debug!("switching screen: {} → {}", self.active_screen, target);
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.set_focused(false);
                    }
                    self.active_screen = target;
                    self.search = None;
                    if let Some(screen) = self.screens.get_mut(&target) {
                        screen.set_focused(true);
                        debug!(screen = screen.id(), "focused");
                    }
                }
            }

            Action::ToggleHelp => self.help_visible = !self.help_visible,

            Action::GoBack => match self.active_kind() {
                Some(kind) if list_view(&self.back_office, kind).filter.is_some() => {
                    self.back_office.clear_filter(kind);
                    self.reset_selection();
                }
                _ => {}
            },

            Action::Refresh => {
                report(self.back_office.refresh().await, "refresh");
                for screen in self.screens.values_mut() {
                    screen.reset_selection();
                }
            }

            // ── Search and filters ──────────────────────────────────
            Action::OpenSearch => {
                if let Some(kind) = self.active_kind() {
                    self.back_office.clear_filter(kind);
                    self.search = Some(String::new());
                }
            }
            Action::SearchInput(c) => {
                if let Some(ref mut term) = self.search {
                    term.push(c);
                }
                self.apply_search();
            }
            Action::SearchBackspace => {
                if let Some(ref mut term) = self.search {
                    term.pop();
                }
                self.apply_search();
            }
            Action::CloseSearch { keep } => {
                if let Some(kind) = self.active_kind().filter(|_| !keep) {
                    self.back_office.clear_filter(kind);
                }
                self.search = None;
                self.reset_selection();
            }
            Action::ApplyFilter(kind) => {
                match kind {
                    EntityKind::Room => {
                        self.back_office.filter_available_rooms();
                    }
                    EntityKind::Booking => {
                        let today_active = matches!(
                            self.back_office.bookings().filter(),
                            RowFilter::Status {
                                filter: BookingFilter::Today,
                                ..
                            }
                        );
                        if today_active {
                            self.back_office.filter_upcoming_bookings();
                        } else {
                            self.back_office.filter_bookings_today();
                        }
                    }
                    EntityKind::Guest => {}
                }
                self.reset_selection();
            }
            Action::ClearFilter(kind) => {
                self.back_office.clear_filter(kind);
                self.reset_selection();
            }

            // ── Forms ───────────────────────────────────────────────
            Action::OpenAddForm(kind) => {
                self.form_cursor = 0;
                match kind {
                    EntityKind::Room => self.back_office.open_room_form(),
                    EntityKind::Guest => self.back_office.open_guest_form(),
                    EntityKind::Booking => self.back_office.open_booking_form().await,
                }
            }
            Action::OpenEditForm(kind, id) => {
                self.form_cursor = 0;
                let result = match kind {
                    EntityKind::Room => self.back_office.edit_room(&id).await,
                    EntityKind::Guest => self.back_office.edit_guest(&id).await,
                    EntityKind::Booking => self.back_office.edit_booking(&id).await,
                };
                report(result, "open edit form");
            }
            Action::CloseForm => self.back_office.close_forms(),
            Action::FormNextField | Action::FormPrevField => {
                if let Some(view) = form::open_form(&self.back_office) {
                    let len = view.fields.len().max(1);
                    self.form_cursor = if action == Action::FormNextField {
                        (self.form_cursor + 1) % len
                    } else {
                        (self.form_cursor + len - 1) % len
                    };
                }
            }
            Action::FormInput(c) => self.edit_field(|value| {
                value.push(c);
            }),
            Action::FormBackspace => self.edit_field(|value| {
                value.pop();
            }),
            Action::FormCycle(forward) => {
                let Some(view) = form::open_form(&self.back_office) else {
                    return;
                };
                let Some(field) = view.field(self.form_cursor) else {
                    return;
                };
                let next = field
                    .choices
                    .as_deref()
                    .and_then(|choices| form::cycle(choices, &field.value, forward));
                if let Some(value) = next {
                    form::set_field(&mut self.back_office, view.kind, field.field, value);
                }
            }
            Action::SubmitForm => {
                let Some(view) = form::open_form(&self.back_office) else {
                    return;
                };
                let result = match view.kind {
                    EntityKind::Room => self.back_office.submit_room_form().await,
                    EntityKind::Guest => self.back_office.submit_guest_form().await,
                    EntityKind::Booking => self.back_office.submit_booking_form().await,
                };
                match result {
                    Ok(id) => info!(kind = %view.kind, %id, "form saved"),
                    Err(e) => debug!(kind = %view.kind, error = %e, "form not saved"),
                }
            }

            // ── Delete ──────────────────────────────────────────────
            Action::RequestDelete(kind, id) => self.back_office.request_delete(kind, id),
            Action::ConfirmYes => {
                if let Ok(true) = self.back_office.confirm_delete().await {
                    self.reset_selection();
                }
            }
            Action::ConfirmNo => self.back_office.cancel_delete(),

            // ── Booking status ──────────────────────────────────────
            Action::CheckIn(id) => report(self.back_office.check_in(&id).await, "check in"),
            Action::CheckOut(id) => report(self.back_office.check_out(&id).await, "check out"),
        }
    }

    fn apply_search(&mut self) {
        if let (Some(kind), Some(term)) = (self.active_kind(), self.search.as_deref()) {
            let visible = self.back_office.search(kind, term);
            debug!(%kind, term, visible, "search");
        }
        self.reset_selection();
    }

    /// Edit the focused text field of the open form.
    fn edit_field(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(view) = form::open_form(&self.back_office) else {
            return;
        };
        let Some(field) = view.field(self.form_cursor) else {
            return;
        };
        if field.choices.is_some() {
            return;
        }
        let mut value = field.value.clone();
        edit(&mut value);
        form::set_field(&mut self.back_office, view.kind, field.field, value);
    }

    fn reset_selection(&mut self) {
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.reset_selection();
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Layout: [screen content] [tab bar] [status bar]
        let layout = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.render(frame, layout[0], &self.back_office);
        }
        self.render_tab_bar(frame, layout[1]);
        self.render_status_bar(frame, layout[2]);

        // Overlays, last = topmost
        if self.help_visible {
            render_help_overlay(frame, area);
        }
        if let Some(view) = form::open_form(&self.back_office) {
            form::render(frame, area, &view, self.form_cursor);
        }
        if let Some(target) = self.back_office.delete_confirmation().pending() {
            widgets::confirm::render(frame, area, target);
        }
        widgets::toast::render(frame, layout[0], self.back_office.toasts().live());
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = ScreenId::ALL
            .iter()
            .map(|&id| {
                let style = if id == self.active_screen {
                    theme::tab_active()
                } else {
                    theme::tab_inactive()
                };
                Line::from(Span::styled(
                    format!(" {} {} ", id.number(), id.label()),
                    style,
                ))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .divider(Span::styled(" ", theme::key_hint()))
            .select(
                ScreenId::ALL
                    .iter()
                    .position(|&s| s == self.active_screen)
                    .unwrap_or(0),
            );

        frame.render_widget(tabs, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if let Some(ref term) = self.search {
            let line = Line::from(vec![
                Span::styled(" / ", Style::default().fg(theme::ACCENT_VIOLET)),
                Span::styled(term.as_str(), Style::default().fg(theme::INFO_CYAN)),
                Span::styled("█", Style::default().fg(theme::INFO_CYAN)),
                Span::styled("  Esc cancel  Enter keep", theme::key_hint()),
            ]);
            frame.render_widget(Paragraph::new(line), area);
            return;
        }

        let connection = match self.back_office.connection() {
            ConnectionState::Connected => {
                Span::styled("● connected", Style::default().fg(theme::SUCCESS_GREEN))
            }
            ConnectionState::Disconnected { .. } => {
                Span::styled("○ disconnected", Style::default().fg(theme::ERROR_RED))
            }
            ConnectionState::Unknown => {
                Span::styled("◐ connecting", Style::default().fg(theme::WARNING_AMBER))
            }
        };

        let mut spans = vec![
            Span::raw(" "),
            connection,
            Span::styled(
                format!("  {}", self.back_office.client().api_url()),
                theme::key_hint(),
            ),
        ];
        if self.busy {
            spans.push(Span::styled(
                "  ◌ working…",
                Style::default().fg(theme::WARNING_AMBER),
            ));
        }
        spans.push(Span::styled(
            " │ ? help  / search  r refresh  q quit",
            theme::key_hint(),
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

/// Log a failed handler. The back office has already toasted it.
fn report<T>(result: Result<T, CoreError>, what: &str) {
    if let Err(e) = result {
        warn!(error = %e, "{what} failed");
    }
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_area = widgets::centered(area, 60, 24);
    frame.render_widget(Clear, help_area);

    let block = Block::default()
        .title(" Keyboard Shortcuts ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_focused())
        .style(Style::default().bg(theme::BG_DARK));

    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);

    let section = |title: &'static str| {
        [
            Line::from(Span::styled(
                format!("  {title}"),
                Style::default().fg(theme::INFO_CYAN),
            )),
            Line::from(Span::styled(
                format!("  {}", "─".repeat(title.len())),
                theme::key_hint(),
            )),
        ]
    };
    let entry = |keys: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {keys:<10}"), theme::key_hint_key()),
            Span::styled(text, theme::key_hint()),
        ])
    };

    let mut lines = vec![Line::from("")];
    lines.extend(section("Navigation"));
    lines.extend([
        entry("1-4", "Jump to screen"),
        entry("Tab", "Next screen"),
        entry("j/k ↑/↓", "Move up/down"),
        entry("g/G", "Top / bottom"),
        entry("Esc", "Close / clear filter"),
        Line::from(""),
    ]);
    lines.extend(section("Lists"));
    lines.extend([
        entry("a", "Add"),
        entry("e Enter", "Edit selected"),
        entry("d", "Delete selected"),
        entry("/", "Search"),
        entry("f", "Filter (available / today / upcoming)"),
        entry("c", "Clear search and filter"),
        entry("i/o", "Check in / check out"),
        Line::from(""),
    ]);
    lines.extend(section("Global"));
    lines.extend([
        entry("r", "Refresh all data"),
        entry("x", "Dismiss newest toast"),
        entry("?", "This help"),
        entry("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "                         Esc or ? to close",
            theme::key_hint(),
        )),
    ]);

    frame.render_widget(Paragraph::new(lines), inner);
}
