//! Palette and semantic styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

use frontdesk_core::Severity;

// ── Core Palette ──────────────────────────────────────────────────────

pub const ACCENT_BLUE: Color = Color::Rgb(102, 126, 234); // #667eea
pub const ACCENT_VIOLET: Color = Color::Rgb(118, 75, 162); // #764ba2
pub const SUCCESS_GREEN: Color = Color::Rgb(72, 187, 120); // #48bb78
pub const ERROR_RED: Color = Color::Rgb(245, 101, 101); // #f56565
pub const WARNING_AMBER: Color = Color::Rgb(237, 137, 54); // #ed8936
pub const INFO_CYAN: Color = Color::Rgb(66, 153, 225); // #4299e1

// ── Extended Palette ──────────────────────────────────────────────────

pub const DIM_WHITE: Color = Color::Rgb(203, 213, 224); // #cbd5e0
pub const BORDER_GRAY: Color = Color::Rgb(113, 128, 150); // #718096
pub const BG_HIGHLIGHT: Color = Color::Rgb(45, 55, 72); // #2d3748
pub const BG_DARK: Color = Color::Rgb(26, 32, 44); // #1a202c

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD)
}

pub fn border_focused() -> Style {
    Style::default().fg(ACCENT_VIOLET)
}

pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

pub fn table_header() -> Style {
    Style::default()
        .fg(ACCENT_BLUE)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn table_row() -> Style {
    Style::default().fg(DIM_WHITE)
}

pub fn table_selected() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

pub fn tab_active() -> Style {
    Style::default()
        .fg(ACCENT_VIOLET)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

pub fn tab_inactive() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD)
}

/// Validation message under a form field.
pub fn field_error() -> Style {
    Style::default().fg(ERROR_RED)
}

pub fn severity(severity: Severity) -> Color {
    match severity {
        Severity::Success => SUCCESS_GREEN,
        Severity::Error => ERROR_RED,
        Severity::Warning => WARNING_AMBER,
        Severity::Info => INFO_CYAN,
    }
}

/// Status badge color for room and booking status codes.
pub fn status_color(code: &str) -> Color {
    match code {
        "available" | "checked-in" => SUCCESS_GREEN,
        "occupied" | "booked" => INFO_CYAN,
        "maintenance" => WARNING_AMBER,
        "checked-out" => BORDER_GRAY,
        _ => DIM_WHITE,
    }
}
