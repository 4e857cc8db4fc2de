//! Colors and styles for the atlas TUI.
//!
//! Views import from here instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

/// Parchment gold — titles, selected items.
pub const ACCENT: Color = Color::Rgb(0xE0, 0xB0, 0x4C);
/// Slate blue — focused borders, headings.
pub const PRIMARY: Color = Color::Rgb(0x5C, 0x7C, 0xB8);
/// Moss green — occupied atlas cells.
pub const OCCUPIED: Color = Color::Rgb(0x6A, 0xA8, 0x4F);

pub const TEXT: Color = Color::Rgb(0xE0, 0xE0, 0xE0);
pub const TEXT_MUTED: Color = Color::Rgb(0x80, 0x80, 0x80);
pub const TEXT_DIM: Color = Color::Rgb(0x50, 0x50, 0x50);

pub const ERROR: Color = Color::Rgb(0xEF, 0x53, 0x50);
pub const SUCCESS: Color = Color::Rgb(0x66, 0xBB, 0x6A);

pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn heading() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn highlight() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Empty grid cell.
pub fn cell_empty() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Grid cell holding a card.
pub fn cell_occupied() -> Style {
    Style::default().fg(OCCUPIED).add_modifier(Modifier::BOLD)
}

/// Grid cell under the cursor.
pub fn cell_cursor() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn status(is_error: bool) -> Style {
    Style::default().fg(if is_error { ERROR } else { SUCCESS })
}

pub fn block_focused(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PRIMARY))
}

pub fn block_default(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT_DIM))
}
