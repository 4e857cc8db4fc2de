//! Atlas board: card picker, 8x8 grid, and placed card values.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::core::atlas::{
    format_number, value_key, Atlas, Characteristic, PlacedCard, Position, LEGAL_COORDINATES,
};
use crate::tui::app::AppState;
use crate::tui::theme;

/// Width of one grid cell in columns.
const CELL_WIDTH: usize = 5;

pub fn render(frame: &mut Frame, area: Rect, app: &AppState) {
    let cols = Layout::horizontal([
        Constraint::Length(24),
        Constraint::Length((CELL_WIDTH * 8 + 8) as u16),
        Constraint::Min(30),
    ])
    .split(area);

    render_picker(frame, cols[0], app);

    let grid = Paragraph::new(grid_lines(&app.atlas, app.cursor))
        .block(theme::block_focused(&format!("Atlas {}", app.cursor)));
    frame.render_widget(grid, cols[1]);

    let placed = Paragraph::new(placed_lines(&app.atlas))
        .wrap(Wrap { trim: true })
        .block(theme::block_default(&format!("Placed ({})", app.atlas.len())));
    frame.render_widget(placed, cols[2]);
}

fn render_picker(frame: &mut Frame, area: Rect, app: &AppState) {
    let items: Vec<ListItem> = app
        .store
        .cards()
        .iter()
        .map(|c| ListItem::new(c.name.clone()))
        .collect();
    let list = List::new(items)
        .block(theme::block_default("Card [ ]"))
        .highlight_style(theme::highlight())
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn axis_label(v: i8) -> String {
    if v > 0 {
        format!("+{v}")
    } else {
        v.to_string()
    }
}

/// Short cell text: the first letters of the card name.
fn cell_text(placed: Option<&PlacedCard>) -> String {
    let body: String = match placed {
        Some(pc) => pc.card.name.chars().take(CELL_WIDTH - 1).collect(),
        None => "·".to_string(),
    };
    format!("{body:^width$}", width = CELL_WIDTH)
}

/// Grid rows, y = -4 at the top, with axis legends.
pub fn grid_lines(atlas: &Atlas, cursor: Position) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(LEGAL_COORDINATES.len() + 4);

    lines.push(Line::styled(
        format!(
            "  {} →   ← {}",
            Characteristic::Quality.label(),
            Characteristic::Quantity.label()
        ),
        theme::muted(),
    ));

    let mut header = String::from("    ");
    for x in LEGAL_COORDINATES {
        header.push_str(&format!("{:^width$}", axis_label(x), width = CELL_WIDTH));
    }
    lines.push(Line::styled(header, theme::muted()));

    for y in LEGAL_COORDINATES {
        let mut spans = vec![Span::styled(format!("{:>3} ", axis_label(y)), theme::muted())];
        for x in LEGAL_COORDINATES {
            let Ok(pos) = Position::new(x, y) else {
                continue;
            };
            let placed = atlas.get(pos);
            let style = if pos == cursor {
                theme::cell_cursor()
            } else if placed.is_some() {
                theme::cell_occupied()
            } else {
                theme::cell_empty()
            };
            spans.push(Span::styled(cell_text(placed), style));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::styled(
        format!(
            "  ↓ {}   ↑ {}",
            Characteristic::Cost.label(),
            Characteristic::Power.label()
        ),
        theme::muted(),
    ));
    lines
}

/// Values panel: every placed card with its computed values.
pub fn placed_lines(atlas: &Atlas) -> Vec<Line<'static>> {
    if atlas.is_empty() {
        return vec![Line::styled("No cards on the atlas yet.", theme::muted())];
    }

    let mut lines = Vec::new();
    for pc in atlas.iter() {
        lines.push(Line::from(vec![
            Span::styled(pc.card.name.clone(), theme::title()),
            Span::styled(format!(" {}", pc.position), theme::muted()),
        ]));
        for (i, r) in pc.card.ranges.iter().enumerate() {
            let value = pc
                .calculated_values
                .get(&value_key(r.characteristic, i))
                .map(|v| format_number(*v))
                .unwrap_or_else(|| "?".to_string());
            lines.push(Line::from(vec![
                Span::styled(format!("  {}", r.characteristic.label()), theme::heading()),
                Span::styled(
                    format!(
                        "  {} - {}",
                        format_number(r.min_value),
                        format_number(r.max_value)
                    ),
                    theme::muted(),
                ),
                Span::styled(format!("  → {value}"), theme::highlight()),
            ]));
        }
        lines.push(Line::raw(format!("  {}", pc.calculated_description)));
        lines.push(Line::raw(""));
    }
    lines
}
