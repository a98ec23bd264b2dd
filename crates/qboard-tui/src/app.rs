//! TUI application state

use crate::components::Spinner;
use crossterm::event::{KeyCode, KeyModifiers};
use qboard_core::{ClientError, QueueEnvelope, QueueView};

/// TUI application state
///
/// Owns the queue view exclusively; nothing outside the app mutates it.
pub struct App {
    /// Current view state (loading / loaded / failed)
    pub view: QueueView,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Loading spinner animation
    pub spinner: Spinner,

    /// Scroll offset into the rendered list, in lines
    pub scroll: usize,

    /// Upper bound for `scroll`, updated by the renderer each frame
    pub max_scroll: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            view: QueueView::Loading,
            should_quit: false,
            spinner: Spinner::new(),
            scroll: 0,
            max_scroll: 0,
        }
    }

    /// Apply the outcome of the single fetch.
    pub fn resolve_fetch(&mut self, result: Result<QueueEnvelope, ClientError>) {
        self.view.resolve(result);
    }

    /// Handle keyboard input. Input never mutates fetch state, only quits
    /// or scrolls the loaded list.
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = (self.scroll + 1).min(self.max_scroll);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            _ => {}
        }
    }
}
