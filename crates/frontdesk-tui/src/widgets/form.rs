//! Centered form popup for adding and editing entities.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use frontdesk_core::form::{Form, FormSpec};
use frontdesk_core::{
    BackOffice, BookingStatus, EntityKind, FormField, RoomStatus, RoomType, SelectOption, format,
};

use crate::action::Action;
use crate::theme;

use super::centered;

// ── View model ──────────────────────────────────────────────────────

/// One field of the open form, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: FormField,
    /// Raw value as stored in the form.
    pub value: String,
    /// What the user sees: option labels for dropdowns.
    pub display: String,
    pub error: Option<String>,
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub kind: EntityKind,
    pub editing: bool,
    pub fields: Vec<FieldView>,
    pub min_check_in: Option<NaiveDate>,
}

impl FormView {
    pub fn title(&self) -> String {
        match (self.kind, self.editing) {
            (EntityKind::Booking, false) => " Create Booking ".into(),
            (kind, false) => format!(" Add {} ", kind.title()),
            (kind, true) => format!(" Edit {} ", kind.title()),
        }
    }

    pub fn field(&self, cursor: usize) -> Option<&FieldView> {
        self.fields.get(cursor)
    }
}

/// The form currently open on the back office, if any.
pub fn open_form(back_office: &BackOffice) -> Option<FormView> {
    if back_office.room_form().is_open() {
        Some(view_of(back_office.room_form(), back_office))
    } else if back_office.guest_form().is_open() {
        Some(view_of(back_office.guest_form(), back_office))
    } else if back_office.booking_form().is_open() {
        Some(view_of(back_office.booking_form(), back_office))
    } else {
        None
    }
}

fn view_of<S: FormSpec>(form: &Form<S>, back_office: &BackOffice) -> FormView {
    let fields = form
        .fields()
        .iter()
        .map(|&field| {
            let value = form.value(field).to_owned();
            let choices = choices(field, back_office);
            let display = choices
                .as_ref()
                .and_then(|c| c.iter().find(|c| c.value == value))
                .map_or_else(|| value.clone(), |c| c.label.clone());
            FieldView {
                field,
                value,
                display,
                error: form.error(field).map(str::to_owned),
                choices,
            }
        })
        .collect();

    FormView {
        kind: S::KIND,
        editing: form.editing().is_some(),
        fields,
        min_check_in: form.min_check_in(),
    }
}

/// Allowed values of an enumerated or dropdown field.
pub fn choices(field: FormField, back_office: &BackOffice) -> Option<Vec<Choice>> {
    let fixed = |pairs: Vec<(String, String)>| -> Option<Vec<Choice>> {
        Some(
            pairs
                .into_iter()
                .map(|(value, label)| Choice { value, label })
                .collect(),
        )
    };
    let options = |options: &[SelectOption]| {
        fixed(
            options
                .iter()
                .map(|o| (o.id.to_string(), o.label.clone()))
                .collect(),
        )
    };

    match field {
        FormField::RoomType => fixed(
            RoomType::KNOWN
                .iter()
                .map(|t| (t.code().to_owned(), t.label().to_owned()))
                .collect(),
        ),
        FormField::RoomStatus => fixed(
            RoomStatus::KNOWN
                .iter()
                .map(|s| (s.code().to_owned(), s.code().to_owned()))
                .collect(),
        ),
        FormField::BookingStatus => fixed(
            BookingStatus::KNOWN
                .iter()
                .map(|s| (s.code().to_owned(), s.code().to_owned()))
                .collect(),
        ),
        FormField::BookingGuest => options(back_office.guest_option_list()),
        FormField::BookingRoom => options(back_office.room_option_list()),
        _ => None,
    }
}

/// The value after stepping once through `choices` from `current`.
///
/// An unknown current value steps to the first (forwards) or last choice.
pub fn cycle(choices: &[Choice], current: &str, forward: bool) -> Option<String> {
    let len = choices.len();
    if len == 0 {
        return None;
    }
    let next = match choices.iter().position(|c| c.value == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    choices.get(next).map(|c| c.value.clone())
}

/// Write one field of the open form of `kind`.
pub fn set_field(back_office: &mut BackOffice, kind: EntityKind, field: FormField, value: String) {
    match kind {
        EntityKind::Room => back_office.room_form_mut().set(field, value),
        EntityKind::Guest => back_office.guest_form_mut().set(field, value),
        EntityKind::Booking => back_office.booking_form_mut().set(field, value),
    };
}

// ── Keys ────────────────────────────────────────────────────────────

/// Map a key press inside the form. `on_choice` tells whether the focused
/// field is enumerated, where typing is ignored and arrows cycle.
pub fn handle_key(key: KeyEvent, on_choice: bool) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::CloseForm),
        KeyCode::Enter => Some(Action::SubmitForm),
        KeyCode::Tab | KeyCode::Down => Some(Action::FormNextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FormPrevField),
        KeyCode::Left if on_choice => Some(Action::FormCycle(false)),
        KeyCode::Right | KeyCode::Char(' ') if on_choice => Some(Action::FormCycle(true)),
        KeyCode::Backspace if !on_choice => Some(Action::FormBackspace),
        KeyCode::Char(c)
            if !on_choice
                && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Action::FormInput(c))
        }
        _ => None,
    }
}

// ── Rendering ───────────────────────────────────────────────────────

pub fn render(frame: &mut Frame, area: Rect, view: &FormView, cursor: usize) {
    let errors = view.fields.iter().filter(|f| f.error.is_some()).count();
    let rows = view.fields.len() + errors + usize::from(view.min_check_in.is_some()) + 4;
    let popup = centered(area, 64, u16::try_from(rows).unwrap_or(u16::MAX));
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(view.title())
        .title_style(
            Style::default()
                .fg(theme::ACCENT_BLUE)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(theme::border_focused());

    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let label = Style::default().fg(theme::DIM_WHITE);
    let focused_label = Style::default()
        .fg(theme::ACCENT_VIOLET)
        .add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(Color::White);

    let mut lines = Vec::new();
    for (idx, f) in view.fields.iter().enumerate() {
        let is_focused = idx == cursor;
        let lbl_style = if is_focused { focused_label } else { label };
        let marker = if is_focused { "▸ " } else { "  " };
        let (open, close) = match (&f.choices, is_focused) {
            (Some(_), true) => ("◂ ", " ▸"),
            _ => ("", ""),
        };
        let cursor_mark = if is_focused && f.choices.is_none() { "▎" } else { "" };

        lines.push(Line::from(vec![
            Span::styled(marker, lbl_style),
            Span::styled(format!("{:<16}", f.field.label()), lbl_style),
            Span::styled(open, theme::key_hint_key()),
            Span::styled(f.display.clone(), value_style),
            Span::styled(close, theme::key_hint_key()),
            Span::styled(cursor_mark, Style::default().fg(theme::ACCENT_VIOLET)),
        ]));
        if let Some(ref err) = f.error {
            lines.push(Line::from(Span::styled(
                format!("{:<18}{err}", ""),
                theme::field_error(),
            )));
        }
    }

    if let Some(min) = view.min_check_in {
        lines.push(Line::from(Span::styled(
            format!("  Earliest check-in: {}", format::input_date(min)),
            theme::key_hint(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" Tab", theme::key_hint_key()),
        Span::styled(" next  ", theme::key_hint()),
        Span::styled("←/→", theme::key_hint_key()),
        Span::styled(" choose  ", theme::key_hint()),
        Span::styled("Enter", theme::key_hint_key()),
        Span::styled(" save  ", theme::key_hint()),
        Span::styled("Esc", theme::key_hint_key()),
        Span::styled(" cancel", theme::key_hint()),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}
