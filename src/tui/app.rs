use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};

use super::theme;
use super::views::{atlas as atlas_view, collection as collection_view};
use crate::core::atlas::{parse_ranges, Atlas, Axis, Position};
use crate::core::cards::{Card, CardDraft};
use crate::core::storage::CardStore;

/// Which top-level view has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Collection,
    Atlas,
}

impl Focus {
    pub fn label(self) -> &'static str {
        match self {
            Focus::Collection => "Collection",
            Focus::Atlas => "Atlas",
        }
    }

    pub fn toggle(self) -> Focus {
        match self {
            Focus::Collection => Focus::Atlas,
            Focus::Atlas => Focus::Collection,
        }
    }
}

/// One-line message shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

/// Central application state.
pub struct AppState {
    pub running: bool,
    pub focus: Focus,
    /// Index of the selected card in the store.
    pub selected: usize,
    /// Cursor cell on the atlas.
    pub cursor: Position,
    /// Card input line, `Some` while typing.
    pub input: Option<String>,
    /// Id of the card the input line is editing; `None` creates a new card.
    pub editing: Option<String>,
    pub status: Option<StatusLine>,
    pub store: CardStore,
    pub atlas: Atlas,
}

impl AppState {
    pub fn new(store: CardStore) -> Self {
        Self {
            running: true,
            focus: Focus::Collection,
            selected: 0,
            cursor: Position::TOP_LEFT,
            input: None,
            editing: None,
            status: None,
            store,
            atlas: Atlas::new(),
        }
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.store.cards().get(self.selected)
    }

    fn info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            text: text.into(),
            is_error: false,
        });
    }

    fn error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            text: text.into(),
            is_error: true,
        });
    }

    fn select_next(&mut self) {
        if !self.store.is_empty() {
            self.selected = (self.selected + 1).min(self.store.len() - 1);
        }
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.running = false;
            return;
        }
        if self.input.is_some() {
            self.handle_input_key(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Tab => self.focus = self.focus.toggle(),
            _ => match self.focus {
                Focus::Collection => self.handle_collection_key(key),
                Focus::Atlas => self.handle_atlas_key(key),
            },
        }
    }

    fn handle_collection_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Char('n') => {
                self.input = Some(String::new());
                self.editing = None;
                self.status = None;
            }
            KeyCode::Char('e') => self.begin_edit(),
            KeyCode::Char('d') => self.delete_selected(),
            _ => {}
        }
    }

    fn handle_atlas_key(&mut self, key: KeyEvent) {
        let step = match key.code {
            KeyCode::Left => Some((Axis::X, false)),
            KeyCode::Right => Some((Axis::X, true)),
            KeyCode::Up => Some((Axis::Y, false)),
            KeyCode::Down => Some((Axis::Y, true)),
            _ => None,
        };
        if let Some((axis, forward)) = step {
            if let Some(next) = self.cursor.step(axis, forward) {
                self.cursor = next;
            }
            return;
        }

        match key.code {
            KeyCode::Char(']') => self.select_next(),
            KeyCode::Char('[') => self.select_prev(),
            KeyCode::Enter => self.place_selected(),
            KeyCode::Char('x') => {
                if let Some(removed) = self.atlas.remove(self.cursor) {
                    self.info(format!("Removed '{}' from {}", removed.card.name, self.cursor));
                }
            }
            KeyCode::Char('c') => {
                self.atlas.clear();
                self.info("Atlas cleared");
            }
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input = None;
                self.editing = None;
            }
            KeyCode::Backspace => {
                if let Some(buffer) = self.input.as_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.input.as_mut() {
                    buffer.push(c);
                }
            }
            KeyCode::Enter => {
                let line = self.input.take().unwrap_or_default();
                self.submit_card(&line);
            }
            _ => {}
        }
    }

    /// Open the input line on the selected card as `Name | description`.
    fn begin_edit(&mut self) {
        let Some(card) = self.selected_card() else {
            self.error("No card selected");
            return;
        };
        let line = format!("{} | {}", card.name, card.description);
        let id = card.id.clone();
        self.editing = Some(id);
        self.input = Some(line);
        self.status = None;
    }

    /// Save `Name | description with [Label: min-max] tags`.
    ///
    /// Creates a card, or replaces the one being edited. When editing, an
    /// empty description keeps the card's ranges and regenerates the
    /// description from them; placements of the card are recomputed.
    pub fn submit_card(&mut self, line: &str) {
        let (name, description) = line.split_once('|').unwrap_or((line, ""));
        let (name, description) = (name.trim(), description.trim());

        let edited = self
            .editing
            .take()
            .and_then(|id| self.store.get(&id).cloned());
        let draft = match &edited {
            Some(card) => {
                let mut draft = CardDraft::edit(card);
                draft.name = name.to_string();
                draft.description = description.to_string();
                if !description.is_empty() {
                    draft.ranges = parse_ranges(description);
                }
                draft
            }
            None => CardDraft::from_description(name, description),
        };

        let card = match draft.validate() {
            Ok(card) => Arc::new(card),
            Err(e) => {
                self.error(e.to_string());
                return;
            }
        };
        if let Err(e) = self.store.upsert(card.as_ref().clone()) {
            log::error!("Failed to save card '{}': {e}", card.name);
            self.error(format!("Save failed: {e}"));
            return;
        }

        if edited.is_some() {
            let refreshed = self.atlas.refresh_card(&card);
            self.info(format!(
                "Updated '{}' ({refreshed} placement(s) refreshed)",
                card.name
            ));
        } else {
            self.selected = self.store.len() - 1;
            self.info(format!(
                "Created '{}' with {} range(s)",
                card.name,
                card.ranges.len()
            ));
        }
    }

    fn delete_selected(&mut self) {
        let Some(card) = self.selected_card() else {
            return;
        };
        let (id, name) = (card.id.clone(), card.name.clone());
        match self.store.delete(&id) {
            Ok(_) => {
                let removed = self.atlas.forget_card(&id);
                self.selected = self.selected.min(self.store.len().saturating_sub(1));
                self.info(format!("Deleted '{name}' ({removed} placement(s) removed)"));
            }
            Err(e) => {
                log::error!("Failed to delete card '{name}': {e}");
                self.error(format!("Delete failed: {e}"));
            }
        }
    }

    fn place_selected(&mut self) {
        let Some(card) = self.selected_card().cloned() else {
            self.error("No card selected");
            return;
        };
        let name = card.name.clone();
        let replaced = self.atlas.place(Arc::new(card), self.cursor);
        match replaced {
            Some(old) => self.info(format!(
                "Placed '{name}' at {} (replaced '{}')",
                self.cursor, old.card.name
            )),
            None => self.info(format!("Placed '{name}' at {}", self.cursor)),
        }
    }
}

/// Run the event loop until the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    tick: Duration,
) -> io::Result<()> {
    while app.running {
        terminal.draw(|frame| render(frame, app))?;
        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}

pub fn render(frame: &mut Frame, app: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    let tabs: Vec<Span> = [Focus::Collection, Focus::Atlas]
        .into_iter()
        .flat_map(|f| {
            let style = if f == app.focus {
                theme::highlight()
            } else {
                theme::muted()
            };
            [Span::styled(format!(" {} ", f.label()), style), Span::raw(" ")]
        })
        .collect();
    let mut header = vec![Span::styled(" CCG Atlas ", theme::title()), Span::raw("│ ")];
    header.extend(tabs);
    frame.render_widget(Paragraph::new(Line::from(header)), chunks[0]);

    match app.focus {
        Focus::Collection => collection_view::render(frame, chunks[1], app),
        Focus::Atlas => atlas_view::render(frame, chunks[1], app),
    }

    let footer = match &app.status {
        Some(status) => Line::from(Span::styled(
            format!(" {}", status.text),
            theme::status(status.is_error),
        )),
        None => Line::from(Span::styled(
            match app.focus {
                Focus::Collection =>  " [n] new  [e] edit  [d] delete  [↑↓] select  [Tab] atlas  [q] quit",
                Focus::Atlas => {
                    " [←↑↓→] move  [[ ]] card  [Enter] place  [x] remove  [c] clear  [Tab] collection  [q] quit"
                }
            },
            theme::key_hint(),
        )),
    };
    frame.render_widget(Paragraph::new(footer), chunks[2]);
}
