//! Card collection: list, detail, and the card input line.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::core::atlas::format_number;
use crate::core::cards::Card;
use crate::tui::app::AppState;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, app: &AppState) {
    let (body, input_area) = if app.input.is_some() {
        let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(area);
        (rows[0], Some(rows[1]))
    } else {
        (area, None)
    };

    let cols = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(body);

    render_list(frame, cols[0], app);
    render_detail(frame, cols[1], app.selected_card());

    if let (Some(area), Some(buffer)) = (input_area, app.input.as_deref()) {
        let input = Paragraph::new(Line::from(vec![
            Span::raw(buffer),
            Span::styled("▏", theme::highlight()),
        ]))
        .block(theme::block_focused(input_title(app)));
        frame.render_widget(input, area);
    }
}

pub fn input_title(app: &AppState) -> &'static str {
    if app.editing.is_some() {
        "Edit card: Name | text with [Label: min-max] tags (empty text keeps ranges)"
    } else {
        "New card: Name | text with [Label: min-max] tags"
    }
}

fn render_list(frame: &mut Frame, area: Rect, app: &AppState) {
    let title = format!("Cards ({})", app.store.len());
    if app.store.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "No cards yet. Press [n] to create one.",
            theme::muted(),
        ))
        .block(theme::block_focused(&title));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .store
        .cards()
        .iter()
        .map(|card| {
            ListItem::new(Line::from(vec![
                Span::raw(card.name.clone()),
                Span::styled(format!("  ({} ranges)", card.ranges.len()), theme::muted()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(theme::block_focused(&title))
        .highlight_style(theme::highlight())
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// One line per range: label, stored bounds.
pub fn range_lines(card: &Card) -> Vec<Line<'static>> {
    card.ranges
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Line::from(vec![
                Span::styled(format!("#{} ", i + 1), theme::muted()),
                Span::styled(r.characteristic.label(), theme::heading()),
                Span::raw(format!(
                    "  {} - {}",
                    format_number(r.min_value),
                    format_number(r.max_value)
                )),
            ])
        })
        .collect()
}

fn render_detail(frame: &mut Frame, area: Rect, card: Option<&Card>) {
    let Some(card) = card else {
        frame.render_widget(Paragraph::new("").block(theme::block_default("Card")), area);
        return;
    };

    let mut lines = vec![
        Line::styled(card.description.clone(), theme::muted()),
        Line::raw(""),
        Line::styled("Characteristics", theme::heading()),
    ];
    lines.extend(range_lines(card));

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(theme::block_default(&card.name));
    frame.render_widget(detail, area);
}
