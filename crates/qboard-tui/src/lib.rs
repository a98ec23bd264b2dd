//! qboard-tui - TUI frontend for qboard using Ratatui

pub mod app;
pub mod components;
pub mod ui;

pub use app::App;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use qboard_core::QueueClient;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::oneshot;

/// Run the TUI application
pub async fn run(client: QueueClient) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // App starts in the loading state
    let mut app = App::new();

    // Spawn the single fetch; its result arrives over a oneshot channel.
    // If the user quits first the receiver is dropped and the pending
    // result is silently discarded.
    let (fetch_tx, mut fetch_rx) = oneshot::channel();
    tokio::spawn(async move {
        let result = client.fetch_queue().await;
        let _ = fetch_tx.send(result);
    });

    let result = run_loop(&mut terminal, &mut app, &mut fetch_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    fetch_rx: &mut oneshot::Receiver<
        Result<qboard_core::QueueEnvelope, qboard_core::ClientError>,
    >,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        // Check if the fetch completed (non-blocking)
        if let Ok(result) = fetch_rx.try_recv() {
            tracing::debug!(ok = result.is_ok(), "fetch resolved");
            app.resolve_fetch(result);
        }

        // Draw UI (loading box, error panel, or queue list)
        terminal.draw(|f| ui::render(f, app))?;

        // Handle input with timeout for event polling
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code, key.modifiers);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
