use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use colset::app::{App, Route, UiTheme};
use colset::kernel::services::adapters::{
    ensure_prefs_dir, ensure_settings_file, load_settings, FileStore, MemoryStore,
};
use colset::kernel::services::ports::{KeyValueStore, Settings};
use colset::tui::TerminalGuard;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> io::Result<()> {
    // 用法: colset [route]，例如 `colset /pro-table`
    let route = std::env::args()
        .nth(1)
        .map(|arg| Route::parse(&arg))
        .unwrap_or_default();

    let settings = match ensure_settings_file() {
        Ok(_) => load_settings().unwrap_or_default(),
        Err(_) => Settings::default(),
    };
    let logging = logging::init(&settings);
    if let Some(guard) = logging.as_ref() {
        tracing::debug!(log_dir = %guard.log_dir().display(), route = route.path(), "starting");
    }

    let prefs_root = prefs_root(&settings);
    let theme = UiTheme::from_settings(&settings.theme);
    let mut app = App::new(route, theme, || open_store(prefs_root.as_ref()));

    let guard = TerminalGuard::new()?;
    guard.install_panic_hook();
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let mut dirty = true;
    while !app.should_quit() {
        if dirty {
            terminal.draw(|frame| app.render(frame))?;
            dirty = false;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                dirty |= app.handle_key(key);
            }
            Event::Resize(_, _) => dirty = true,
            _ => {}
        }
    }

    drop(terminal);
    drop(guard);
    tracing::info!("bye");
    Ok(())
}

fn prefs_root(settings: &Settings) -> Option<PathBuf> {
    if let Some(dir) = settings.storage_dir.clone() {
        return Some(dir);
    }
    match ensure_prefs_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            tracing::warn!(error = %e, "prefs dir unavailable, preferences kept in memory");
            None
        }
    }
}

fn open_store(root: Option<&PathBuf>) -> Box<dyn KeyValueStore> {
    match root {
        Some(dir) => Box::new(FileStore::new(dir.clone())),
        None => Box::new(MemoryStore::new()),
    }
}
