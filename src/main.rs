use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ccg_atlas::config::AppConfig;
use ccg_atlas::core::logging;
use ccg_atlas::core::storage::CardStore;
use ccg_atlas::tui::{self, AppState};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load();
    let _log_guard = logging::init_tui(&config.log_dir(), &config.logging.level);
    log::info!("{} v{} starting", ccg_atlas::NAME, ccg_atlas::VERSION);

    let cards_path = config.cards_path();
    let store = CardStore::open(&cards_path)
        .with_context(|| format!("failed to load cards from {}", cards_path.display()))?;
    let mut app = AppState::new(store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = tui::run(
        &mut terminal,
        &mut app,
        Duration::from_millis(config.tui.tick_rate_ms),
    );

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.context("terminal session failed")?;
    log::info!("Exiting with {} card(s) saved", app.store.len());
    Ok(())
}
