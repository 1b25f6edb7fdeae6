//! Terminal management and main run loop

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fetchtour_core::{HttpPostsClient, PostsApi, TourConfig};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::info;

use crate::app::App;
use crate::dispatch::{Completion, Dispatcher};
use crate::ui::UI;

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Run the page against the configured service
pub async fn run(config: &TourConfig) -> Result<()> {
    let client = HttpPostsClient::new(&config.api).context("Failed to build posts client")?;
    info!(base_url = client.base_url(), "starting fetchtour page");
    let api: Arc<dyn PostsApi> = Arc::new(client);

    let mut terminal = init_terminal()?;
    let mut app = App::new(config);
    let mut ui = UI::new();

    let result = run_loop(&mut terminal, &mut app, &mut ui, api).await;

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop
async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    ui: &mut UI<'_>,
    api: Arc<dyn PostsApi>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();
    let dispatcher = Dispatcher::new(api, tx);

    // Draw once so the lists show their loading state, then mount
    terminal.draw(|f| ui.render(f, app))?;
    for request in app.mount_requests() {
        dispatcher.dispatch(request);
    }

    loop {
        while let Ok(completion) = rx.try_recv() {
            app.apply(completion);
        }

        ui.sync_from(app);
        terminal.draw(|f| ui.render(f, app))?;

        // Poll for events (with 100ms timeout for responsive UI)
        if let Some(event) = poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Typing goes to the focused field, everything else to the app
                    if app.is_text_input(&key) {
                        ui.handle_input(key, app);
                    } else if let Some(request) = app.handle_key_event(key) {
                        dispatcher.dispatch(request);
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resized, will re-render on next loop
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    info!("fetchtour page closed");
    Ok(())
}

/// Poll for events with timeout
fn poll_event(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
